//! Failure taxonomy for a single fetch.

use thiserror::Error;

/// Coarse kind of a [`FetchError`], for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The URL could not be used at all (malformed, unsupported scheme).
    BadUrl,
    /// Connectivity or transport failure (DNS, refused, timeout, TLS).
    Network,
    /// Local read/write failure while moving the body.
    Io,
    /// The load was torn down before it completed.
    Interrupted,
}

/// Error returned by [`Fetcher::fetch`](super::Fetcher::fetch) and by the pipeline.
///
/// None of these are retried. Non-2xx statuses are not errors; they come back
/// as a [`Fetched`](super::Fetched) without a body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {reason}")]
    BadUrl { url: String, reason: String },
    #[error("network failure: {0}")]
    Network(String),
    #[error("I/O failure: {0}")]
    Io(String),
    #[error("load interrupted before completion")]
    Interrupted,
}

impl FetchError {
    pub(crate) fn bad_url(url: &str, reason: impl ToString) -> Self {
        FetchError::BadUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::BadUrl { .. } => FetchErrorKind::BadUrl,
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Io(_) => FetchErrorKind::Io,
            FetchError::Interrupted => FetchErrorKind::Interrupted,
        }
    }

    /// Short message suitable for an end user; never includes transport details.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::BadUrl { .. } => "The configured endpoint URL is invalid.",
            FetchError::Network(_) => "No internet connection.",
            FetchError::Io(_) => "Could not read the server response.",
            FetchError::Interrupted => "Loading was cancelled.",
        }
    }

    /// An interrupted load is a cancel, not something to show the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, FetchError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            FetchError::bad_url("x", "relative URL without a base").kind(),
            FetchErrorKind::BadUrl
        );
        assert_eq!(FetchError::Network("refused".into()).kind(), FetchErrorKind::Network);
        assert_eq!(FetchError::Io("disk".into()).kind(), FetchErrorKind::Io);
        assert_eq!(FetchError::Interrupted.kind(), FetchErrorKind::Interrupted);
    }

    #[test]
    fn only_interrupted_is_silent() {
        assert!(FetchError::Interrupted.is_silent());
        assert!(!FetchError::Network("dns".into()).is_silent());
        assert!(!FetchError::bad_url("x", "y").is_silent());
    }

    #[test]
    fn user_message_hides_detail() {
        let e = FetchError::Network("Couldn't resolve host name".into());
        assert_eq!(e.user_message(), "No internet connection.");
        assert!(e.to_string().contains("resolve host"));
    }
}
