//! Quotes view state.

use super::Quote;
use crate::shared::{FetchTicket, LoadState, Loadable, Notices};

#[derive(Debug, Clone, Default)]
pub struct QuotesState {
    quotes: Loadable<Vec<Quote>>,
    pub notices: Notices,
}

impl QuotesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.quotes.begin()
    }

    pub fn apply_load(&mut self, ticket: FetchTicket, result: Result<Vec<Quote>, String>) {
        match result {
            Ok(quotes) => {
                self.quotes.succeed(ticket, quotes);
            }
            Err(reason) => {
                if self.quotes.fail(ticket, reason.clone()) {
                    self.notices
                        .error(format!("Could not load quotes: {}", reason));
                }
            }
        }
    }

    pub fn load_state(&self) -> &LoadState<Vec<Quote>> {
        self.quotes.state()
    }

    pub fn quotes(&self) -> &[Quote] {
        self.quotes.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
