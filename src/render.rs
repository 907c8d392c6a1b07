//! Plain-text rendering of view state for the terminal front-end.

use std::fmt::Write;

use crate::domain::account::{AccountState, FundsAction, FundsDraft};
use crate::domain::quote::QuotesState;
use crate::domain::trader::{DirectoryState, TraderDraft};
use crate::shared::{LoadState, Modal, Notices};

/// Left-aligned table with a header rule.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: &mut dyn Iterator<Item = &str>| -> String {
        cells
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(&mut headers.iter().copied()));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  ")
    );
    for row in rows {
        let _ = writeln!(out, "{}", line(&mut row.iter().map(String::as_str)));
    }
    out
}

fn notices(out: &mut String, notices: &Notices) {
    for notice in notices.iter() {
        let _ = writeln!(
            out,
            "[{}] {} ({})",
            notice.level.as_str(),
            notice.message,
            notice.id
        );
    }
}

fn load_banner<T>(out: &mut String, state: &LoadState<T>) -> bool {
    match state {
        LoadState::Idle => {
            let _ = writeln!(out, "(not loaded)");
            false
        }
        LoadState::Loading => {
            let _ = writeln!(out, "Loading...");
            false
        }
        LoadState::Failed { reason } => {
            let _ = writeln!(out, "Load failed: {}. Retry to try again.", reason);
            false
        }
        LoadState::Loaded(_) => true,
    }
}

fn modal_status<D>(out: &mut String, title: &str, modal: &Modal<D>, body: impl Fn(&D) -> String) {
    match modal {
        Modal::Closed => {}
        Modal::Open { draft, error } => {
            let _ = writeln!(out, "[{}] {}", title, body(draft));
            if let Some(error) = error {
                let _ = writeln!(out, "  ! {}", error);
            }
        }
        Modal::Submitting { draft } => {
            let _ = writeln!(out, "[{}] {} (submitting...)", title, body(draft));
        }
    }
}

pub fn directory(state: &DirectoryState) -> String {
    let mut out = String::from("Dashboard\n\n");
    if load_banner(&mut out, state.load_state()) {
        let rows: Vec<Vec<String>> = state
            .traders()
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.first_name.clone(),
                    t.last_name.clone(),
                    t.email.clone(),
                    t.dob.clone(),
                    t.country.clone(),
                ]
            })
            .collect();
        out.push_str(&table(
            &["Id", "First Name", "Last Name", "Email", "Date of Birth", "Country"],
            &rows,
        ));
    }
    modal_status(&mut out, "Add New Trader", state.add_modal(), |d: &TraderDraft| {
        format!(
            "{} {} <{}> {} {}",
            d.first_name, d.last_name, d.email, d.dob, d.country
        )
    });
    if let Some(id) = state.pending_delete() {
        let _ = writeln!(out, "Delete trader {}? (confirm or cancel)", id);
    }
    notices(&mut out, &state.notices);
    out
}

pub fn account(state: &AccountState) -> String {
    let mut out = String::from("Trader Account\n\n");
    if load_banner(&mut out, state.load_state()) {
        if let Some(view) = state.account() {
            let t = &view.trader;
            let _ = writeln!(out, "First Name     {}", t.first_name);
            let _ = writeln!(out, "Last Name      {}", t.last_name);
            let _ = writeln!(out, "Email          {}", t.email);
            let _ = writeln!(out, "Date of Birth  {}", t.dob);
            let _ = writeln!(out, "Country        {}", t.country);
            let _ = writeln!(out);
            let _ = writeln!(out, "Amount         {}$", view.account.amount);
        }
    }
    for action in [FundsAction::Deposit, FundsAction::Withdraw] {
        modal_status(&mut out, action.title(), state.modal(action), |d: &FundsDraft| {
            format!("amount: {}", d.amount)
        });
    }
    notices(&mut out, &state.notices);
    out
}

pub fn quotes(state: &QuotesState) -> String {
    let mut out = String::from("Quotes\n\n");
    if load_banner(&mut out, state.load_state()) {
        let rows: Vec<Vec<String>> = state
            .quotes()
            .iter()
            .map(|q| {
                vec![
                    q.ticker.clone(),
                    q.last_price.to_string(),
                    q.bid_price.to_string(),
                    q.bid_size.to_string(),
                    q.ask_price.to_string(),
                    q.ask_size.to_string(),
                ]
            })
            .collect();
        out.push_str(&table(
            &["Ticker", "Last", "Bid", "Bid Size", "Ask", "Ask Size"],
            &rows,
        ));
    }
    notices(&mut out, &state.notices);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, TraderAccount};
    use crate::domain::trader::Trader;
    use crate::shared::TraderId;
    use rust_decimal::Decimal;

    fn mike() -> Trader {
        Trader {
            id: TraderId::new(1),
            first_name: "Mike".into(),
            last_name: "Spencer".into(),
            email: "mike@test.com".into(),
            dob: "1990-01-01".into(),
            country: "Canada".into(),
        }
    }

    #[test]
    fn test_table_alignment() {
        let out = table(&["A", "Long"], &[vec!["xyz".into(), "1".into()]]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "A    Long");
        assert_eq!(lines[1], "---  ----");
        assert_eq!(lines[2], "xyz  1");
    }

    #[test]
    fn test_directory_lists_traders() {
        let mut state = DirectoryState::new();
        let t = state.begin_load();
        state.apply_load(t, Ok(vec![mike()]));
        state.request_delete(TraderId::new(1));
        let out = directory(&state);
        assert!(out.contains("Mike"));
        assert!(out.contains("mike@test.com"));
        assert!(out.contains("Delete trader 1?"));
    }

    #[test]
    fn test_account_shows_balance_and_modal_error() {
        let mut state = AccountState::new(TraderId::new(1));
        let t = state.begin_load();
        state.apply_load(
            t,
            Ok(TraderAccount {
                trader: mike(),
                account: Account {
                    trader_id: TraderId::new(1),
                    amount: Decimal::from(150),
                },
            }),
        );
        state.open(FundsAction::Withdraw);
        state.set_pending_amount(FundsAction::Withdraw, "-1");
        let _ = state.begin_submit(FundsAction::Withdraw);
        let out = account(&state);
        assert!(out.contains("Amount         150$"));
        assert!(out.contains("[Withdraw Funds] amount: -1"));
        assert!(out.contains("  ! Amount must be positive"));
    }

    #[test]
    fn test_failed_load_banner() {
        let mut state = QuotesState::new();
        let t = state.begin_load();
        state.apply_load(t, Err("Timeout".into()));
        let out = quotes(&state);
        assert!(out.contains("Load failed: Timeout"));
        assert!(out.contains("[error] Could not load quotes: Timeout"));
    }
}
