//! Navigation shell: maps URL paths to views.
//!
//! | path               | view                          |
//! |--------------------|-------------------------------|
//! | `/`                | redirect to `/dashboard`      |
//! | `/dashboard`       | trader directory              |
//! | `/quotes`          | quote daily list              |
//! | `/trader/:traderId`| one trader's account          |

use crate::error::RouteError;
use crate::shared::TraderId;

pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const QUOTES_PATH: &str = "/quotes";
pub const TRADER_PATH_PREFIX: &str = "/trader/";

const MAX_REDIRECTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Quotes,
    TraderAccount(TraderId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => DASHBOARD_PATH.to_string(),
            Route::Quotes => QUOTES_PATH.to_string(),
            Route::TraderAccount(id) => format!("{}{}", TRADER_PATH_PREFIX, id),
        }
    }
}

/// Result of matching a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Show(Route),
    Redirect { to: &'static str },
}

/// Match one path without following redirects.
///
/// Query strings, fragments and trailing slashes are ignored.
pub fn resolve(path: &str) -> Result<Navigation, RouteError> {
    let clean = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = clean.trim_end_matches('/');

    match trimmed {
        "" => Ok(Navigation::Redirect { to: DASHBOARD_PATH }),
        DASHBOARD_PATH => Ok(Navigation::Show(Route::Dashboard)),
        QUOTES_PATH => Ok(Navigation::Show(Route::Quotes)),
        other => match other.strip_prefix(TRADER_PATH_PREFIX) {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => segment
                .parse::<TraderId>()
                .map(|id| Navigation::Show(Route::TraderAccount(id)))
                .map_err(|_| RouteError::InvalidTraderId(segment.to_string())),
            _ => Err(RouteError::NotFound(path.to_string())),
        },
    }
}

/// Match a path, following redirects to the view that should be shown.
pub fn navigate(path: &str) -> Result<Route, RouteError> {
    let mut current = path.to_string();
    for _ in 0..MAX_REDIRECTS {
        match resolve(&current)? {
            Navigation::Show(route) => return Ok(route),
            Navigation::Redirect { to } => {
                tracing::debug!(from = %current, to, "Redirecting");
                current = to.to_string();
            }
        }
    }
    Err(RouteError::RedirectLoop(path.to_string()))
}
