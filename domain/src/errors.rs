use thiserror::Error;

/// Failure categories of a single fetch against the upstream endpoint.
///
/// Both are non-fatal: the screen that issued the fetch moves to its error
/// state and stays there until it is activated again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint could not be reached, or its body could not be decoded.
    #[error("could not read players from upstream: {reason}")]
    ConnectionError { reason: String },
    /// The endpoint answered with `success: false`.
    #[error("upstream reported a failure")]
    ApplicationError,
}

impl FetchError {
    pub fn connection(reason: impl std::fmt::Display) -> Self {
        Self::ConnectionError {
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::ConnectionError { .. } => FetchErrorKind::Connection,
            Self::ApplicationError => FetchErrorKind::Application,
        }
    }
}

/// The part of a [`FetchError`] a screen needs to pick its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Connection,
    Application,
}
