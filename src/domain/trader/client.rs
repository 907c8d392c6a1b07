//! Traders sub-client: list, create, delete.

use crate::client::DashboardClient;
use crate::domain::trader::{NewTrader, Trader};
use crate::error::DashboardError;
use crate::shared::TraderId;

pub struct Traders<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Traders<'a> {
    /// All traders, in backend order.
    pub async fn list(&self) -> Result<Vec<Trader>, DashboardError> {
        let traders = self.client.http.get_traders().await?;
        traders
            .into_iter()
            .map(|t| Trader::try_from(t).map_err(DashboardError::from))
            .collect()
    }

    pub async fn create(&self, trader: &NewTrader) -> Result<(), DashboardError> {
        self.client.http.create_trader(trader).await?;
        tracing::info!(
            first_name = %trader.first_name,
            last_name = %trader.last_name,
            "Trader created"
        );
        Ok(())
    }

    pub async fn delete(&self, trader_id: TraderId) -> Result<(), DashboardError> {
        self.client.http.delete_trader(trader_id).await?;
        tracing::info!(%trader_id, "Trader deleted");
        Ok(())
    }
}
