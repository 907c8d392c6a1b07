//! Accounts sub-client: account view, deposit, withdraw.

use crate::client::DashboardClient;
use crate::domain::account::{FundsAction, TraderAccount};
use crate::error::DashboardError;
use crate::shared::{FundsAmount, TraderId};

pub struct Accounts<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Accounts<'a> {
    /// Profile and balance for one trader.
    pub async fn get(&self, trader_id: TraderId) -> Result<TraderAccount, DashboardError> {
        let resp = self.client.http.get_trader_account(trader_id).await?;
        Ok(TraderAccount::try_from(resp)?)
    }

    pub async fn deposit(
        &self,
        trader_id: TraderId,
        amount: &FundsAmount,
    ) -> Result<(), DashboardError> {
        self.client.http.deposit_funds(trader_id, amount).await?;
        tracing::info!(%trader_id, %amount, "Deposit accepted");
        Ok(())
    }

    pub async fn withdraw(
        &self,
        trader_id: TraderId,
        amount: &FundsAmount,
    ) -> Result<(), DashboardError> {
        self.client.http.withdraw_funds(trader_id, amount).await?;
        tracing::info!(%trader_id, %amount, "Withdrawal accepted");
        Ok(())
    }

    /// Dispatch on the modal the amount came from.
    pub async fn apply(
        &self,
        action: FundsAction,
        trader_id: TraderId,
        amount: &FundsAmount,
    ) -> Result<(), DashboardError> {
        match action {
            FundsAction::Deposit => self.deposit(trader_id, amount).await,
            FundsAction::Withdraw => self.withdraw(trader_id, amount).await,
        }
    }
}
