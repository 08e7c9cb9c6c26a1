pub mod config;
pub mod logging;

pub mod fetch;
pub mod parse;
pub mod pipeline;
pub mod record;

pub use fetch::{CurlFetcher, FetchError, FetchErrorKind, FetchOptions, Fetched, Fetcher};
pub use parse::parse_records;
pub use pipeline::{LoadHandle, Loader, Pipeline};
pub use record::Record;
