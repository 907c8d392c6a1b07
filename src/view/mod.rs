//! View controllers: drive a sub-client and the matching state container.
//!
//! Each view owns its state behind `Arc<RwLock<_>>`. The lock is never held
//! across a request, so actions on one view may run concurrently; fetch
//! tickets keep the displayed data from going backwards.

pub mod account;
pub mod directory;
pub mod quotes;

pub use account::TraderAccountView;
pub use directory::TraderDirectoryView;
pub use quotes::QuotesView;

use crate::client::DashboardClient;
use crate::error::DashboardError;
use crate::router::Route;
use crate::shared::SubmitBlocked;

/// What an operator action ended in. Failures are also recorded as notices
/// on the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// Nothing was sent.
    Blocked(SubmitBlocked),
    /// The request was sent and failed.
    Failed(String),
}

impl ActionOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionOutcome::Done)
    }

    /// Collapse into a `Result` for callers that stop at the first failure.
    pub fn into_result(self) -> Result<(), DashboardError> {
        match self {
            ActionOutcome::Done => Ok(()),
            ActionOutcome::Blocked(SubmitBlocked::Invalid(reason)) => {
                Err(DashboardError::Validation(reason))
            }
            ActionOutcome::Blocked(other) => Err(DashboardError::Other(other.to_string())),
            ActionOutcome::Failed(reason) => Err(DashboardError::Other(reason)),
        }
    }
}

/// The view a route resolved to, already loaded once.
#[derive(Clone)]
pub enum MountedView {
    Directory(TraderDirectoryView),
    Account(TraderAccountView),
    Quotes(QuotesView),
}

/// Build the view for `route` and run its initial fetch.
pub async fn mount(client: &DashboardClient, route: Route) -> MountedView {
    tracing::debug!(path = %route.path(), "Mounting view");
    match route {
        Route::Dashboard => {
            let view = TraderDirectoryView::new(client.clone());
            view.load().await;
            MountedView::Directory(view)
        }
        Route::Quotes => {
            let view = QuotesView::new(client.clone());
            view.load().await;
            MountedView::Quotes(view)
        }
        Route::TraderAccount(trader_id) => {
            let view = TraderAccountView::new(client.clone(), trader_id);
            view.load().await;
            MountedView::Account(view)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DraftError, ValidationError};

    #[test]
    fn test_invalid_outcome_is_validation_error() {
        let outcome = ActionOutcome::Blocked(SubmitBlocked::Invalid(ValidationError::Draft(
            DraftError::Missing("Email"),
        )));
        assert!(matches!(
            outcome.into_result(),
            Err(DashboardError::Validation(ValidationError::Draft(DraftError::Missing("Email"))))
        ));
        assert!(ActionOutcome::Done.into_result().is_ok());
        assert!(matches!(
            ActionOutcome::Failed("Not found".into()).into_result(),
            Err(DashboardError::Other(reason)) if reason == "Not found"
        ));
    }
}
