//! Terminal result of one download attempt.

use std::fmt;

/// Why a download was counted as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Terminal response that was neither 200 nor a followed redirect.
    Http(u16),
    /// The server answered 200 with no body bytes.
    EmptyFile,
    /// Connection, TLS or body stream failure.
    Request,
    /// Creating or writing the destination file failed.
    Write,
    /// The request did not finish within the per-request timeout.
    Timeout,
    /// The redirect chain was longer than the configured hop cap.
    TooManyRedirects,
    /// URL or redirect target could not be parsed, or is not http(s).
    InvalidUrl,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Http(code) => write!(f, "HTTP {}", code),
            FailureReason::EmptyFile => f.write_str("empty file"),
            FailureReason::Request => f.write_str("request error"),
            FailureReason::Write => f.write_str("file write error"),
            FailureReason::Timeout => f.write_str("timeout"),
            FailureReason::TooManyRedirects => f.write_str("too many redirects"),
            FailureReason::InvalidUrl => f.write_str("invalid URL"),
        }
    }
}

/// Result of one fetch. Every error path ends up here; the fetcher never returns `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success {
        bytes_written: u64,
    },
    Failed {
        reason: FailureReason,
        /// Underlying error message, when there is one.
        detail: Option<String>,
    },
    Skipped {
        reason: String,
    },
}

impl DownloadOutcome {
    pub fn failed(reason: FailureReason) -> Self {
        DownloadOutcome::Failed {
            reason,
            detail: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadOutcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DownloadOutcome::Skipped { .. })
    }

    /// Failure reason, if this outcome is a failure.
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            DownloadOutcome::Failed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
