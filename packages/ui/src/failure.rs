//! # Failure classification
//!
//! Every backend failure that reaches a view is turned into a [`Failure`] and
//! rendered as local error state. Which rule wins depends on the screen:
//!
//! | Screen | Order |
//! |--------|-------|
//! | Feed | 401, server message, unknown |
//! | Post detail | 404, 401, server message, unknown |
//! | Create / edit submit | server message, 401, 403, unknown |
//! | Delete, other actions | server message, unknown |

use api::{ApiError, StatusCode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    LoginRequired,
    NotPermitted,
    Server(String),
    Unknown,
}

impl Failure {
    pub fn for_feed(err: &ApiError) -> Self {
        if err.is_unauthorized() {
            Failure::LoginRequired
        } else {
            Self::server_or_unknown(err)
        }
    }

    pub fn for_detail(err: &ApiError) -> Self {
        match err.status() {
            Some(StatusCode::NOT_FOUND) => Failure::NotFound,
            Some(StatusCode::UNAUTHORIZED) => Failure::LoginRequired,
            _ => Self::server_or_unknown(err),
        }
    }

    pub fn for_submit(err: &ApiError) -> Self {
        if let Some(message) = err.server_message() {
            return Failure::Server(message.to_string());
        }
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) => Failure::LoginRequired,
            Some(StatusCode::FORBIDDEN) => Failure::NotPermitted,
            _ => Failure::Unknown,
        }
    }

    pub fn server_or_unknown(err: &ApiError) -> Self {
        match err.server_message() {
            Some(message) => Failure::Server(message.to_string()),
            None => Failure::Unknown,
        }
    }

    /// Text shown to the user; `fallback` covers [`Failure::Unknown`].
    pub fn message(&self, fallback: &str) -> String {
        match self {
            Failure::NotFound => "Post not found.".to_string(),
            Failure::LoginRequired => "Login required. Please sign in again.".to_string(),
            Failure::NotPermitted => "You are not permitted to do that.".to_string(),
            Failure::Server(message) => message.clone(),
            Failure::Unknown => fallback.to_string(),
        }
    }
}
