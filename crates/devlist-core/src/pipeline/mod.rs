//! Fetch-then-parse orchestration.
//!
//! [`Pipeline::load`] is the blocking form and runs on whatever thread calls it.
//! [`Loader`] moves each load onto a background worker and hands the result
//! back exactly once.

mod loader;

pub use loader::{LoadHandle, Loader};

use crate::fetch::{FetchError, Fetcher};
use crate::parse::parse_records;
use crate::record::Record;

/// Fetcher plus parser. Holds no state between loads.
#[derive(Debug, Clone)]
pub struct Pipeline<F> {
    fetcher: F,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch `url` and parse the body into records.
    ///
    /// A fetch failure is returned untouched and the parser is not run. A
    /// response without a usable body (non-2xx, empty) yields an empty vector.
    /// Every call performs a fresh fetch.
    pub fn load(&self, url: &str) -> Result<Vec<Record>, FetchError> {
        let fetched = self.fetcher.fetch(url)?;

        let records = match fetched.body.as_deref() {
            Some(body) if !body.trim().is_empty() => parse_records(body),
            _ => {
                tracing::debug!("HTTP {} with no body from {}", fetched.status, url);
                Vec::new()
            }
        };

        tracing::info!("loaded {} records from {}", records.len(), url);
        Ok(records)
    }
}
