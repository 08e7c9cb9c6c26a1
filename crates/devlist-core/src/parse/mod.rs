//! Search response decoding.
//!
//! Tolerant at element granularity: one malformed entry is skipped and the
//! rest of the batch is kept. Nothing here returns an error.

mod item;

use serde::Deserialize;
use serde_json::Value;

use crate::record::Record;
use item::SearchItem;

/// Top-level field holding the result array.
const ITEMS_FIELD: &str = "items";

/// Decode a search response body into records, in response order.
///
/// Invalid JSON, a non-object top level, or a missing/non-array `items` field
/// all yield an empty vector.
pub fn parse_records(body: &str) -> Vec<Record> {
    let root: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("response is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    if let Some(total) = root.get("total_count").and_then(Value::as_u64) {
        tracing::debug!("search reports {} total matches", total);
    }

    let Some(items) = root.get(ITEMS_FIELD).and_then(Value::as_array) else {
        tracing::warn!("response has no `{}` array", ITEMS_FIELD);
        return Vec::new();
    };

    let records: Vec<Record> = items
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let record = record_from_item(raw);
            if record.is_none() {
                tracing::debug!("skipping malformed item at index {}", idx);
            }
            record
        })
        .collect();

    let skipped = items.len() - records.len();
    if skipped > 0 {
        tracing::debug!("kept {} of {} items ({} skipped)", records.len(), items.len(), skipped);
    }
    records
}

fn record_from_item(raw: &Value) -> Option<Record> {
    let item = SearchItem::deserialize(raw).ok()?;
    Record::new(item.login, item.html_url)
}
