//! Shape of one entry in the search response `items` array.

use serde::Deserialize;

/// Fields read from a search result; everything else in the object is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub login: String,
    pub html_url: String,
}
