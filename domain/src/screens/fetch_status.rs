use crate::errors::{FetchError, FetchErrorKind};

pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to server";

/// Lifecycle of the single fetch a screen issues when it is activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(&'static str),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Error(message) => Some(*message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    FetchStarted,
    FetchSucceeded(T),
    FetchFailed(FetchErrorKind),
}

impl<T> From<Result<T, FetchError>> for FetchEvent<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(payload) => Self::FetchSucceeded(payload),
            Err(err) => Self::FetchFailed(err.kind()),
        }
    }
}

/// Message shown for a failed fetch; application failures get the screen's own wording.
pub(super) fn error_message(
    kind: FetchErrorKind,
    application_message: &'static str,
) -> &'static str {
    match kind {
        FetchErrorKind::Connection => CONNECTION_ERROR_MESSAGE,
        FetchErrorKind::Application => application_message,
    }
}
