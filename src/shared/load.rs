//! Load state for data a view fetches from the backend.

/// Where a view's fetched data currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// The first load failed; nothing to show. Retry by loading again.
    Failed { reason: String },
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }
}

/// Identifies one issued fetch. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// `LoadState` plus fetch sequencing.
///
/// Several fetches may be in flight at once (e.g. the re-fetches after a
/// delete and an add racing). A result is applied only when its ticket is
/// newer than the last applied one, so a slow older fetch never overwrites
/// a newer result.
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    state: LoadState<T>,
    refreshing: bool,
    issued: u64,
    applied: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            refreshing: false,
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch. Already-loaded data stays visible while refreshing.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        match self.state {
            LoadState::Loaded(_) => self.refreshing = true,
            _ => self.state = LoadState::Loading,
        }
        FetchTicket(self.issued)
    }

    /// Apply a successful fetch. Returns `false` if the ticket is stale.
    pub fn succeed(&mut self, ticket: FetchTicket, data: T) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.state = LoadState::Loaded(data);
        true
    }

    /// Apply a failed fetch. Returns `false` if the ticket is stale.
    ///
    /// Previously loaded data is kept; only a view with nothing to show moves
    /// to `Failed`.
    pub fn fail(&mut self, ticket: FetchTicket, reason: impl Into<String>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        if !matches!(self.state, LoadState::Loaded(_)) {
            self.state = LoadState::Failed {
                reason: reason.into(),
            };
        }
        true
    }

    fn accept(&mut self, ticket: FetchTicket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.refreshing = self.applied < self.issued;
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    /// A fetch newer than the applied one is still in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Drop everything, including in-flight tickets.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
        self.refreshing = false;
        self.applied = self.issued;
    }
}
