//! Trader directory state: app-owned, updated by the directory view.

use super::{NewTrader, Trader};
use crate::error::DraftError;
use crate::shared::{FetchTicket, LoadState, Loadable, Modal, Notices, SubmitBlocked, TraderId};
use chrono::NaiveDate;

/// One edit to the add-trader form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraderField {
    FirstName(String),
    LastName(String),
    Email(String),
    Country(String),
    Dob(String),
}

/// Raw add-trader form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraderDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    /// `YYYY-MM-DD`
    pub dob: String,
}

impl TraderDraft {
    pub fn set(&mut self, field: TraderField) {
        match field {
            TraderField::FirstName(v) => self.first_name = v,
            TraderField::LastName(v) => self.last_name = v,
            TraderField::Email(v) => self.email = v,
            TraderField::Country(v) => self.country = v,
            TraderField::Dob(v) => self.dob = v,
        }
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.set(TraderField::FirstName(value.into()));
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.set(TraderField::LastName(value.into()));
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.set(TraderField::Email(value.into()));
    }

    pub fn set_country(&mut self, value: impl Into<String>) {
        self.set(TraderField::Country(value.into()));
    }

    pub fn set_dob(&mut self, value: impl Into<String>) {
        self.set(TraderField::Dob(value.into()));
    }

    /// Check every field and build the submission.
    pub fn validate(&self) -> Result<NewTrader, DraftError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = required(&self.email, "Email")?;
        let country = required(&self.country, "Country")?;
        let dob_raw = required(&self.dob, "Date of birth")?;

        if !looks_like_email(&email) {
            return Err(DraftError::InvalidEmail(email));
        }
        let dob = NaiveDate::parse_from_str(&dob_raw, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDob(dob_raw.clone()))?;

        Ok(NewTrader {
            first_name,
            last_name,
            email,
            country,
            dob,
        })
    }
}

fn required(value: &str, name: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Missing(name))
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// State behind the `/dashboard` view.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    traders: Loadable<Vec<Trader>>,
    add_modal: Modal<TraderDraft>,
    pending_delete: Option<TraderId>,
    pub notices: Notices,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Trader list ──────────────────────────────────────────────────────

    pub fn begin_load(&mut self) -> FetchTicket {
        self.traders.begin()
    }

    /// Replace the list wholesale. Stale results are ignored.
    pub fn apply_load(&mut self, ticket: FetchTicket, result: Result<Vec<Trader>, String>) {
        match result {
            Ok(traders) => {
                self.traders.succeed(ticket, traders);
            }
            Err(reason) => {
                if self.traders.fail(ticket, reason.clone()) {
                    self.notices
                        .error(format!("Could not load traders: {}", reason));
                }
            }
        }
    }

    pub fn load_state(&self) -> &LoadState<Vec<Trader>> {
        self.traders.state()
    }

    /// Traders from the last applied fetch; empty before the first one.
    pub fn traders(&self) -> &[Trader] {
        self.traders.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_refreshing(&self) -> bool {
        self.traders.is_refreshing()
    }

    // ── Add-trader modal ─────────────────────────────────────────────────

    pub fn add_modal(&self) -> &Modal<TraderDraft> {
        &self.add_modal
    }

    pub fn open_add(&mut self) {
        self.add_modal.open();
    }

    pub fn cancel_add(&mut self) -> bool {
        self.add_modal.cancel()
    }

    /// Record one edit. Ignored unless the modal is open.
    pub fn set_field(&mut self, field: TraderField) -> bool {
        match self.add_modal.draft_mut() {
            Some(draft) => {
                draft.set(field);
                true
            }
            None => false,
        }
    }

    pub fn begin_add(&mut self) -> Result<NewTrader, SubmitBlocked> {
        self.add_modal.begin_submit(TraderDraft::validate)
    }

    pub fn finish_add(&mut self, result: Result<String, String>) {
        match result {
            Ok(name) => {
                self.add_modal.finish_ok();
                self.notices.success(format!("Added trader {}", name));
            }
            Err(reason) => {
                self.add_modal.finish_err(reason.clone());
                self.notices
                    .error(format!("Could not add trader: {}", reason));
            }
        }
    }

    // ── Delete with confirmation ─────────────────────────────────────────

    /// First step of a delete: remember which trader, send nothing.
    pub fn request_delete(&mut self, id: TraderId) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<TraderId> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.pending_delete.take().is_some()
    }

    /// Second step: hand over the confirmed id.
    pub fn confirm_delete(&mut self) -> Option<TraderId> {
        self.pending_delete.take()
    }

    pub fn finish_delete(&mut self, id: TraderId, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.notices.success(format!("Deleted trader {}", id));
            }
            Err(reason) => {
                self.notices
                    .error(format!("Could not delete trader {}: {}", id, reason));
            }
        }
    }
}
