//! `/quotes`: quote daily list.

use std::sync::Arc;

use async_lock::RwLock;

use crate::client::DashboardClient;
use crate::domain::quote::QuotesState;
use crate::shared::NoticeId;

#[derive(Clone)]
pub struct QuotesView {
    client: DashboardClient,
    state: Arc<RwLock<QuotesState>>,
}

impl QuotesView {
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(QuotesState::new())),
        }
    }

    pub async fn snapshot(&self) -> QuotesState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) {
        let ticket = self.state.write().await.begin_load();
        let result = self.client.quotes().daily_list().await.map_err(|e| {
            tracing::warn!(error = %e, "Quote list fetch failed");
            e.notice_text()
        });
        self.state.write().await.apply_load(ticket, result);
    }

    pub async fn dismiss(&self, id: NoticeId) -> bool {
        self.state.write().await.notices.dismiss(id)
    }
}
