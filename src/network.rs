//! Default endpoint layout of the trading REST API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// `GET` → list of traders.
pub const TRADERS_PATH: &str = "/dashboard/traders";

/// `POST {path}/firstname/{fn}/lastname/{ln}/dob/{dob}/country/{c}/email/{e}`.
pub const CREATE_TRADER_PATH: &str = "/trader";

/// `DELETE {path}/{id}`.
pub const DELETE_TRADER_PATH: &str = "/trader/traderId";

/// `GET {path}{id}` → trader + account.
pub const TRADER_ACCOUNT_PATH: &str = "/dashboard/profile/traderId/";

/// `PUT {path}{id}/amount/{amount}`.
pub const DEPOSIT_FUNDS_PATH: &str = "/trader/deposit/traderId/";

/// `PUT {path}{id}/amount/{amount}`.
pub const WITHDRAW_FUNDS_PATH: &str = "/trader/withdraw/traderId/";

/// `GET` → quote daily list.
pub const DAILY_LIST_QUOTES_PATH: &str = "/quote/dailyList";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
