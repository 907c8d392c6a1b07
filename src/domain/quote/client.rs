//! Quotes sub-client.

use crate::client::DashboardClient;
use crate::domain::quote::Quote;
use crate::error::DashboardError;

pub struct Quotes<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Quotes<'a> {
    pub async fn daily_list(&self) -> Result<Vec<Quote>, DashboardError> {
        let quotes = self.client.http.get_daily_list_quotes().await?;
        quotes
            .into_iter()
            .map(|q| Quote::try_from(q).map_err(DashboardError::from))
            .collect()
    }
}
