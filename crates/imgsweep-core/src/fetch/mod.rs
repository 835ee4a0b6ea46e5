//! Single URL-to-file download.
//!
//! Issues one GET per hop with a fixed timeout, follows 301/302/307 redirects
//! up to a hop cap, streams 200 bodies to disk and rejects empty files. Every
//! failure is turned into a [`DownloadOutcome`]; nothing is propagated.

mod error;
mod outcome;
mod predicate;
mod stream;

pub use error::FetchError;
pub use outcome::{DownloadOutcome, FailureReason};
pub use predicate::{PagePredicate, SubstringPages, NOT_DIRECT_IMAGE};

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::StatusCode;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::SweepConfig;

/// The download step as seen by the scheduler.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Materializes `url` at `dest`. Must not panic or leave partial files behind.
    async fn fetch(&self, url: &str, dest: &Path) -> DownloadOutcome;
}

/// Fetcher tuning (timeouts, redirect cap, User-Agent).
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Deadline for each request, body included.
    pub request_timeout: Duration,
    /// Redirect hops followed before failing.
    pub max_redirects: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            max_redirects: 10,
            user_agent: None,
        }
    }
}

impl From<&SweepConfig> for FetchOptions {
    fn from(cfg: &SweepConfig) -> Self {
        Self {
            request_timeout: cfg.request_timeout(),
            max_redirects: cfg.max_redirects,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// HTTP(S) image fetcher.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    options: FetchOptions,
    pages: Arc<dyn PagePredicate>,
}

/// Non-failure endings of a fetch.
enum Fetched {
    Written(u64),
    Skipped,
}

impl Fetcher {
    /// Builds a fetcher with automatic redirects disabled; redirects are
    /// followed by hand so each hop gets the same checks.
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(ua) = &options.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self {
            client,
            options,
            pages: Arc::new(SubstringPages::default()),
        })
    }

    /// Replaces the default Wikimedia page predicate.
    pub fn with_page_predicate(mut self, pages: impl PagePredicate + 'static) -> Self {
        self.pages = Arc::new(pages);
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Downloads `url` into `dest` and reports the outcome.
    pub async fn download(&self, url: &str, dest: &Path) -> DownloadOutcome {
        match self.try_download(url, dest).await {
            Ok(Fetched::Written(bytes_written)) => {
                tracing::info!(
                    url,
                    path = %dest.display(),
                    bytes = bytes_written,
                    "downloaded"
                );
                DownloadOutcome::Success { bytes_written }
            }
            Ok(Fetched::Skipped) => {
                tracing::info!(url, "skipping wiki page (not a direct image)");
                DownloadOutcome::Skipped {
                    reason: NOT_DIRECT_IMAGE.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(url, reason = %e.reason(), "download failed: {}", e);
                e.into_outcome()
            }
        }
    }

    async fn try_download(&self, url: &str, dest: &Path) -> Result<Fetched, FetchError> {
        if self.pages.is_page(url) {
            return Ok(Fetched::Skipped);
        }
        let mut current = parse_http_url(url)?;
        let mut hops = 0u32;

        loop {
            tracing::debug!(url = %current, hop = hops, "GET");
            let response = self
                .client
                .get(current.clone())
                .timeout(self.options.request_timeout)
                .send()
                .await
                .map_err(FetchError::from_reqwest)?;
            let status = response.status();

            if is_followed_redirect(status) {
                if let Some(location) = response.headers().get(LOCATION) {
                    let location = location.to_str().map_err(|_| FetchError::BadLocation)?;
                    let next = resolve_location(&current, location)?;
                    drop(response);

                    hops += 1;
                    if hops > self.options.max_redirects {
                        return Err(FetchError::TooManyRedirects(self.options.max_redirects));
                    }
                    tracing::debug!(from = %current, to = %next, "following redirect");
                    if self.pages.is_page(next.as_str()) {
                        return Ok(Fetched::Skipped);
                    }
                    current = next;
                    continue;
                }
            }

            if status != StatusCode::OK {
                return Err(FetchError::Status(status.as_u16()));
            }

            let written = stream::write_body(response, dest).await?;
            return Ok(Fetched::Written(written));
        }
    }
}

#[async_trait]
impl Fetch for Fetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> DownloadOutcome {
        self.download(url, dest).await
    }
}

/// Only these statuses are followed; 303/308 are reported like any other non-200.
fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::TEMPORARY_REDIRECT
    )
}

fn parse_http_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    ensure_http(parsed)
}

/// Resolves a `Location` value (absolute or relative) against the current URL.
fn resolve_location(current: &Url, location: &str) -> Result<Url, FetchError> {
    let next = current
        .join(location)
        .map_err(|source| FetchError::InvalidUrl {
            url: location.to_string(),
            source,
        })?;
    ensure_http(next)
}

fn ensure_http(url: Url) -> Result<Url, FetchError> {
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}
