//! HTTP GET of the search endpoint.
//!
//! Uses the curl crate (libcurl) for a single blocking request per call. Call
//! from a blocking worker (see [`crate::pipeline::Loader`]) when used from async code.

mod classify;
mod error;

pub use classify::classify_curl_error;
pub use error::{FetchError, FetchErrorKind};

use std::time::Duration;

/// Outcome of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// HTTP status of the final response (after redirects).
    pub status: u32,
    /// Response text for a 2xx status; `None` for every other status.
    pub body: Option<String>,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of raw response text for a URL.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Fetched, FetchError>;
}

/// Per-request settings for [`CurlFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Time allowed to establish the connection.
    pub connect_timeout: Duration,
    /// Time the transfer may stall before it is aborted.
    pub read_timeout: Duration,
    /// Sent as `Authorization: Bearer <token>` when set.
    pub auth_token: Option<String>,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(10),
            auth_token: None,
            user_agent: concat!("devlist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchOptions {
    /// Replace zero timeouts with the defaults. libcurl reads 0 as "no limit",
    /// which would let a stalled server hang a load forever.
    pub fn bounded(self) -> Self {
        let defaults = FetchOptions::default();
        let mut opts = self;
        if opts.connect_timeout.is_zero() {
            tracing::warn!("connect timeout of 0 replaced by {:?}", defaults.connect_timeout);
            opts.connect_timeout = defaults.connect_timeout;
        }
        if opts.read_timeout.is_zero() {
            tracing::warn!("read timeout of 0 replaced by {:?}", defaults.read_timeout);
            opts.read_timeout = defaults.read_timeout;
        }
        opts
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec!["Accept: application/json".to_string()];
        if let Some(token) = &self.auth_token {
            lines.push(format!("Authorization: Bearer {}", token.trim()));
        }
        lines
    }
}

/// libcurl-backed [`Fetcher`]. No retries, no caching.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self {
            opts: opts.bounded(),
        }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    fn perform(&self, url: &str) -> Result<Fetched, curl::Error> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.opts.user_agent)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        // Abort when the body stalls below 1 byte/s for the read timeout.
        easy.low_speed_limit(1)?;
        easy.low_speed_time(self.opts.read_timeout)?;
        easy.timeout(self.opts.connect_timeout + self.opts.read_timeout)?;

        let mut list = curl::easy::List::new();
        for line in self.opts.header_lines() {
            list.append(&line)?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let fetched = Fetched { status, body: None };
        if !fetched.is_success() {
            return Ok(fetched);
        }
        Ok(Fetched {
            body: Some(String::from_utf8_lossy(&body).into_owned()),
            ..fetched
        })
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        let url = classify::validate_url(url)?;
        tracing::debug!("GET {}", url);

        let fetched = self
            .perform(url.as_str())
            .map_err(|e| classify::from_curl(url.as_str(), &e))?;

        if fetched.is_success() {
            tracing::debug!(
                "GET {} returned HTTP {} ({} bytes)",
                url,
                fetched.status,
                fetched.body.as_ref().map_or(0, String::len)
            );
        } else {
            tracing::warn!("GET {} returned HTTP {}; treating as no data", url, fetched.status);
        }
        Ok(fetched)
    }
}
