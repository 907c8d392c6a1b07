//! Trader account state: profile, balance and the two funds modals.

use super::TraderAccount;
use crate::shared::{
    FetchTicket, FundsAmount, LoadState, Loadable, Modal, Notices, SubmitBlocked, TraderId,
};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundsAction {
    Deposit,
    Withdraw,
}

impl FundsAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundsAction::Deposit => "deposit",
            FundsAction::Withdraw => "withdraw",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FundsAction::Deposit => "Deposit Funds",
            FundsAction::Withdraw => "Withdraw Funds",
        }
    }
}

impl std::fmt::Display for FundsAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Funds modal contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundsDraft {
    pub amount: String,
}

impl FundsDraft {
    pub fn parse(&self) -> Result<FundsAmount, crate::shared::AmountError> {
        FundsAmount::parse(&self.amount)
    }
}

/// State behind the `/trader/:traderId` view.
#[derive(Debug, Clone)]
pub struct AccountState {
    trader_id: TraderId,
    account: Loadable<TraderAccount>,
    deposit: Modal<FundsDraft>,
    withdraw: Modal<FundsDraft>,
    pub notices: Notices,
}

impl AccountState {
    pub fn new(trader_id: TraderId) -> Self {
        Self {
            trader_id,
            account: Loadable::new(),
            deposit: Modal::default(),
            withdraw: Modal::default(),
            notices: Notices::new(),
        }
    }

    pub fn trader_id(&self) -> TraderId {
        self.trader_id
    }

    // ── Profile + balance ────────────────────────────────────────────────

    pub fn begin_load(&mut self) -> FetchTicket {
        self.account.begin()
    }

    pub fn apply_load(&mut self, ticket: FetchTicket, result: Result<TraderAccount, String>) {
        match result {
            Ok(account) => {
                self.account.succeed(ticket, account);
            }
            Err(reason) => {
                if self.account.fail(ticket, reason.clone()) {
                    self.notices.error(format!(
                        "Could not load trader {}: {}",
                        self.trader_id, reason
                    ));
                }
            }
        }
    }

    pub fn load_state(&self) -> &LoadState<TraderAccount> {
        self.account.state()
    }

    pub fn account(&self) -> Option<&TraderAccount> {
        self.account.data()
    }

    /// Balance from the last successful fetch.
    pub fn balance(&self) -> Option<Decimal> {
        self.account.data().map(|a| a.account.amount)
    }

    // ── Funds modals ─────────────────────────────────────────────────────

    pub fn modal(&self, action: FundsAction) -> &Modal<FundsDraft> {
        match action {
            FundsAction::Deposit => &self.deposit,
            FundsAction::Withdraw => &self.withdraw,
        }
    }

    fn modal_mut(&mut self, action: FundsAction) -> &mut Modal<FundsDraft> {
        match action {
            FundsAction::Deposit => &mut self.deposit,
            FundsAction::Withdraw => &mut self.withdraw,
        }
    }

    pub fn open(&mut self, action: FundsAction) {
        self.modal_mut(action).open();
    }

    pub fn cancel(&mut self, action: FundsAction) -> bool {
        self.modal_mut(action).cancel()
    }

    /// Store the raw input. Ignored unless that modal is open.
    pub fn set_pending_amount(&mut self, action: FundsAction, value: impl Into<String>) -> bool {
        match self.modal_mut(action).draft_mut() {
            Some(draft) => {
                draft.amount = value.into();
                true
            }
            None => false,
        }
    }

    pub fn begin_submit(&mut self, action: FundsAction) -> Result<FundsAmount, SubmitBlocked> {
        self.modal_mut(action).begin_submit(FundsDraft::parse)
    }

    pub fn finish_submit(
        &mut self,
        action: FundsAction,
        amount: FundsAmount,
        result: Result<(), String>,
    ) {
        match result {
            Ok(()) => {
                self.modal_mut(action).finish_ok();
                self.notices
                    .success(format!("{} of {} accepted", action.title(), amount));
            }
            Err(reason) => {
                self.modal_mut(action).finish_err(reason.clone());
                self.notices
                    .error(format!("{} of {} failed: {}", action.title(), amount, reason));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Account;
    use crate::domain::trader::Trader;
    use crate::error::ValidationError;
    use crate::shared::{AmountError, NoticeLevel};

    fn account(amount: i64) -> TraderAccount {
        TraderAccount {
            trader: Trader {
                id: TraderId::new(42),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@test.com".into(),
                dob: "1815-12-10".into(),
                country: "UK".into(),
            },
            account: Account {
                trader_id: TraderId::new(42),
                amount: Decimal::from(amount),
            },
        }
    }

    #[test]
    fn test_modals_are_independent() {
        let mut state = AccountState::new(TraderId::new(42));
        state.open(FundsAction::Deposit);
        state.open(FundsAction::Withdraw);
        state.set_pending_amount(FundsAction::Deposit, "10");
        state.set_pending_amount(FundsAction::Withdraw, "20");
        assert!(state.cancel(FundsAction::Withdraw));
        assert!(state.modal(FundsAction::Deposit).is_open());
        assert_eq!(
            state.modal(FundsAction::Deposit).draft().unwrap().amount,
            "10"
        );
    }

    #[test]
    fn test_invalid_amount_blocks_submit() {
        let mut state = AccountState::new(TraderId::new(42));
        state.open(FundsAction::Deposit);
        state.set_pending_amount(FundsAction::Deposit, "ten");
        assert_eq!(
            state.begin_submit(FundsAction::Deposit),
            Err(SubmitBlocked::Invalid(ValidationError::Amount(
                AmountError::NotNumeric("ten".to_string())
            )))
        );
        assert!(state.modal(FundsAction::Deposit).error().is_some());
    }

    #[test]
    fn test_submit_success_closes_and_clears() {
        let mut state = AccountState::new(TraderId::new(42));
        state.open(FundsAction::Deposit);
        state.set_pending_amount(FundsAction::Deposit, "50");
        let amount = state.begin_submit(FundsAction::Deposit).unwrap();
        state.finish_submit(FundsAction::Deposit, amount, Ok(()));
        assert!(state.modal(FundsAction::Deposit).is_closed());
        state.open(FundsAction::Deposit);
        assert_eq!(state.modal(FundsAction::Deposit).draft().unwrap().amount, "");
        assert_eq!(state.notices.latest().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn test_submit_failure_reopens_with_draft() {
        let mut state = AccountState::new(TraderId::new(42));
        state.open(FundsAction::Withdraw);
        state.set_pending_amount(FundsAction::Withdraw, "500");
        let amount = state.begin_submit(FundsAction::Withdraw).unwrap();
        assert!(!state.set_pending_amount(FundsAction::Withdraw, "1"));
        state.finish_submit(FundsAction::Withdraw, amount, Err("Insufficient fund".into()));
        let modal = state.modal(FundsAction::Withdraw);
        assert!(modal.is_open());
        assert_eq!(modal.draft().unwrap().amount, "500");
        assert_eq!(modal.error(), Some("Insufficient fund"));
        assert_eq!(state.notices.errors().count(), 1);
    }

    #[test]
    fn test_balance_comes_only_from_fetches() {
        let mut state = AccountState::new(TraderId::new(42));
        assert_eq!(state.balance(), None);
        let t = state.begin_load();
        state.apply_load(t, Ok(account(100)));
        assert_eq!(state.balance(), Some(Decimal::from(100)));

        state.open(FundsAction::Deposit);
        state.set_pending_amount(FundsAction::Deposit, "50");
        let amount = state.begin_submit(FundsAction::Deposit).unwrap();
        state.finish_submit(FundsAction::Deposit, amount, Ok(()));
        assert_eq!(state.balance(), Some(Decimal::from(100)));

        let t = state.begin_load();
        state.apply_load(t, Ok(account(175)));
        assert_eq!(state.balance(), Some(Decimal::from(175)));
    }

    #[test]
    fn test_load_failure_is_visible() {
        let mut state = AccountState::new(TraderId::new(404));
        let t = state.begin_load();
        state.apply_load(t, Err("Not found".into()));
        assert!(state.load_state().is_failed());
        assert!(state
            .notices
            .latest()
            .unwrap()
            .message
            .contains("trader 404"));
    }
}
