//! `/dashboard`: trader list with add and delete.

use std::sync::Arc;

use async_lock::RwLock;

use super::ActionOutcome;
use crate::client::DashboardClient;
use crate::domain::trader::{DirectoryState, TraderField};
use crate::shared::{NoticeId, SubmitBlocked, TraderId};

#[derive(Clone)]
pub struct TraderDirectoryView {
    client: DashboardClient,
    state: Arc<RwLock<DirectoryState>>,
}

impl TraderDirectoryView {
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(DirectoryState::new())),
        }
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    /// Fetch all traders and replace the list.
    pub async fn load(&self) {
        let ticket = self.state.write().await.begin_load();
        let result = self
            .client
            .traders()
            .list()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Trader list fetch failed");
                e.notice_text()
            });
        self.state.write().await.apply_load(ticket, result);
    }

    pub async fn retry_load(&self) {
        self.load().await;
    }

    // ── Add trader ───────────────────────────────────────────────────────

    pub async fn open_add(&self) {
        self.state.write().await.open_add();
    }

    pub async fn cancel_add(&self) -> bool {
        self.state.write().await.cancel_add()
    }

    pub async fn set_field(&self, field: TraderField) -> bool {
        self.state.write().await.set_field(field)
    }

    /// Validate the draft, create the trader, then re-fetch the list.
    pub async fn confirm_add(&self) -> ActionOutcome {
        let new_trader = match self.state.write().await.begin_add() {
            Ok(new_trader) => new_trader,
            Err(blocked) => return ActionOutcome::Blocked(blocked),
        };

        match self.client.traders().create(&new_trader).await {
            Ok(()) => {
                self.load().await;
                let name = format!("{} {}", new_trader.first_name, new_trader.last_name);
                self.state.write().await.finish_add(Ok(name));
                ActionOutcome::Done
            }
            Err(e) => {
                tracing::warn!(error = %e, "Create trader failed");
                let reason = e.notice_text();
                self.state.write().await.finish_add(Err(reason.clone()));
                ActionOutcome::Failed(reason)
            }
        }
    }

    // ── Delete trader ────────────────────────────────────────────────────

    /// Ask for confirmation before deleting. Sends nothing.
    pub async fn request_delete(&self, trader_id: TraderId) {
        self.state.write().await.request_delete(trader_id);
    }

    pub async fn cancel_delete(&self) -> bool {
        self.state.write().await.cancel_delete()
    }

    /// Delete the trader awaiting confirmation, then re-fetch the list
    /// whether or not the delete succeeded.
    pub async fn confirm_delete(&self) -> ActionOutcome {
        let Some(trader_id) = self.state.write().await.confirm_delete() else {
            return ActionOutcome::Blocked(SubmitBlocked::NotOpen);
        };

        let result = self.client.traders().delete(trader_id).await.map_err(|e| {
            tracing::warn!(%trader_id, error = %e, "Delete trader failed");
            e.notice_text()
        });
        self.load().await;
        self.state
            .write()
            .await
            .finish_delete(trader_id, result.clone());

        match result {
            Ok(()) => ActionOutcome::Done,
            Err(reason) => ActionOutcome::Failed(reason),
        }
    }

    pub async fn dismiss(&self, id: NoticeId) -> bool {
        self.state.write().await.notices.dismiss(id)
    }
}
