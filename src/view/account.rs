//! `/trader/:traderId`: profile, balance, deposit and withdraw.
//!
//! The balance shown is always the one from the latest fetch. After a
//! deposit or withdrawal the view re-fetches; it never adds or subtracts
//! the amount itself.

use std::sync::Arc;

use async_lock::RwLock;

use super::ActionOutcome;
use crate::client::DashboardClient;
use crate::domain::account::{AccountState, FundsAction};
use crate::shared::{NoticeId, TraderId};

#[derive(Clone)]
pub struct TraderAccountView {
    client: DashboardClient,
    trader_id: TraderId,
    state: Arc<RwLock<AccountState>>,
}

impl TraderAccountView {
    pub fn new(client: DashboardClient, trader_id: TraderId) -> Self {
        Self {
            client,
            trader_id,
            state: Arc::new(RwLock::new(AccountState::new(trader_id))),
        }
    }

    pub fn trader_id(&self) -> TraderId {
        self.trader_id
    }

    pub async fn snapshot(&self) -> AccountState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) {
        let ticket = self.state.write().await.begin_load();
        let result = self
            .client
            .accounts()
            .get(self.trader_id)
            .await
            .map_err(|e| {
                tracing::warn!(trader_id = %self.trader_id, error = %e, "Account fetch failed");
                e.notice_text()
            });
        self.state.write().await.apply_load(ticket, result);
    }

    /// Retry affordance for a failed load.
    pub async fn retry_load(&self) {
        self.load().await;
    }

    // ── Funds modals ─────────────────────────────────────────────────────

    pub async fn open(&self, action: FundsAction) {
        self.state.write().await.open(action);
    }

    pub async fn cancel(&self, action: FundsAction) -> bool {
        self.state.write().await.cancel(action)
    }

    pub async fn set_pending_amount(&self, action: FundsAction, value: &str) -> bool {
        self.state.write().await.set_pending_amount(action, value)
    }

    /// Validate the pending amount, send it, then re-fetch the balance.
    pub async fn confirm(&self, action: FundsAction) -> ActionOutcome {
        let amount = match self.state.write().await.begin_submit(action) {
            Ok(amount) => amount,
            Err(blocked) => return ActionOutcome::Blocked(blocked),
        };

        match self
            .client
            .accounts()
            .apply(action, self.trader_id, &amount)
            .await
        {
            Ok(()) => {
                self.load().await;
                self.state
                    .write()
                    .await
                    .finish_submit(action, amount, Ok(()));
                ActionOutcome::Done
            }
            Err(e) => {
                tracing::warn!(
                    trader_id = %self.trader_id,
                    %action,
                    %amount,
                    error = %e,
                    "Funds request failed"
                );
                let reason = e.notice_text();
                self.state
                    .write()
                    .await
                    .finish_submit(action, amount, Err(reason.clone()));
                ActionOutcome::Failed(reason)
            }
        }
    }

    pub async fn open_deposit(&self) {
        self.open(FundsAction::Deposit).await;
    }

    pub async fn open_withdraw(&self) {
        self.open(FundsAction::Withdraw).await;
    }

    pub async fn confirm_deposit(&self) -> ActionOutcome {
        self.confirm(FundsAction::Deposit).await
    }

    pub async fn confirm_withdraw(&self) -> ActionOutcome {
        self.confirm(FundsAction::Withdraw).await
    }

    pub async fn cancel_deposit(&self) -> bool {
        self.cancel(FundsAction::Deposit).await
    }

    pub async fn cancel_withdraw(&self) -> bool {
        self.cancel(FundsAction::Withdraw).await
    }

    pub async fn dismiss(&self, id: NoticeId) -> bool {
        self.state.write().await.notices.dismiss(id)
    }
}
