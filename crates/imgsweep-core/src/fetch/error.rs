//! Fetch error type, classified into a [`DownloadOutcome`] at the fetcher boundary.

use thiserror::Error;

use super::outcome::{DownloadOutcome, FailureReason};

/// Error raised inside a single fetch. Never escapes [`super::Fetcher`]; see
/// [`FetchError::into_outcome`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("redirect Location header is not valid text")]
    BadLocation,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("more than {0} redirects")]
    TooManyRedirects(u32),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("downloaded file is empty")]
    EmptyFile,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Maps a reqwest error, separating timeouts from other transport failures.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Request(e)
        }
    }

    pub fn reason(&self) -> FailureReason {
        match self {
            FetchError::InvalidUrl { .. }
            | FetchError::UnsupportedScheme(_)
            | FetchError::BadLocation => FailureReason::InvalidUrl,
            FetchError::Status(code) => FailureReason::Http(*code),
            FetchError::TooManyRedirects(_) => FailureReason::TooManyRedirects,
            FetchError::Timeout => FailureReason::Timeout,
            FetchError::Request(_) | FetchError::Client(_) => FailureReason::Request,
            FetchError::Write(_) => FailureReason::Write,
            FetchError::EmptyFile => FailureReason::EmptyFile,
        }
    }

    /// Converts into a `Failed` outcome. Status, timeout and empty-file
    /// failures carry no detail; the others keep the error message.
    pub fn into_outcome(self) -> DownloadOutcome {
        let reason = self.reason();
        let detail = match &self {
            FetchError::Status(_) | FetchError::Timeout | FetchError::EmptyFile => None,
            other => Some(other.to_string()),
        };
        DownloadOutcome::Failed { reason, detail }
    }
}
