//! Lenient decoding of catalog search responses.
//!
//! The endpoint is expected to answer `{ "content": [Record], "totalPages": n }`.
//! Malformed responses degrade instead of failing:
//!
//! | Input | Decoded as |
//! |-------|------------|
//! | body is not JSON | no records, 1 page |
//! | `content` missing or not an array | no records |
//! | a `content` element is not a record | that element is skipped |
//! | `totalPages` missing or not a number | 1 page |
//! | `totalPages` negative | 0 pages |
//! | `totalPages` fractional | rounded down |

use serde::Deserialize;
use serde_json::Value;
use shelf_model::{Record, ResultSet};

/// Page count assumed when the response does not report a usable one.
pub const FALLBACK_TOTAL_PAGES: u32 = 1;

/// Decode a raw response body.
pub fn decode_search_page(body: &[u8]) -> ResultSet {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => decode_search_value(&value),
        Err(err) => {
            tracing::warn!(%err, "catalog response is not JSON, treating as empty");
            ResultSet::new(Vec::new(), FALLBACK_TOTAL_PAGES)
        }
    }
}

/// Decode an already parsed response.
pub fn decode_search_value(value: &Value) -> ResultSet {
    let items = match value.get("content") {
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match Record::deserialize(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(index, %err, "skipping malformed catalog record");
                    None
                }
            })
            .collect(),
        Some(_) => {
            tracing::warn!("catalog response content is not an array, treating as empty");
            Vec::new()
        }
        None => {
            tracing::warn!("catalog response has no content, treating as empty");
            Vec::new()
        }
    };

    let total_pages = value
        .get("totalPages")
        .and_then(total_pages_of)
        .unwrap_or(FALLBACK_TOTAL_PAGES);

    ResultSet::new(items, total_pages)
}

fn total_pages_of(value: &Value) -> Option<u32> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(n) = number.as_u64() {
        return Some(u32::try_from(n).unwrap_or(u32::MAX));
    }

    // Negative or fractional.
    number.as_f64().map(|f| {
        if f <= 0.0 {
            0
        } else {
            f.min(f64::from(u32::MAX)) as u32
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(id: i64) -> Value {
        json!({
            "id": id,
            "title": "The Dispossessed",
            "author": "Ursula K. Le Guin",
            "publisher": "Harper & Row",
            "year": 1974,
            "available": true
        })
    }

    #[test]
    fn test_well_formed() {
        let page = decode_search_value(&json!({
            "content": [book(1), book(2)],
            "totalPages": 7
        }));
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[1].id, 2);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn test_missing_content() {
        let page = decode_search_value(&json!({ "totalPages": 3 }));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_content_not_array() {
        let page = decode_search_value(&json!({ "content": "nope", "totalPages": 2 }));
        assert!(page.is_empty());
    }

    #[test]
    fn test_total_pages_fallbacks() {
        let cases = [
            (json!({ "content": [] }), 1),
            (json!({ "content": [], "totalPages": "4" }), 1),
            (json!({ "content": [], "totalPages": null }), 1),
            (json!({ "content": [], "totalPages": -2 }), 0),
            (json!({ "content": [], "totalPages": 2.9 }), 2),
            (json!({ "content": [], "totalPages": 0 }), 0),
        ];
        for (value, expected) in cases {
            assert_eq!(decode_search_value(&value).total_pages, expected, "{value}");
        }
    }

    #[test]
    fn test_malformed_record_skipped() {
        let page = decode_search_value(&json!({
            "content": [book(1), { "id": "x" }, book(3)],
            "totalPages": 1
        }));
        let ids: Vec<_> = page.items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_not_json() {
        let page = decode_search_page(b"<html>502 Bad Gateway</html>");
        assert!(page.is_empty());
        assert_eq!(page.total_pages, FALLBACK_TOTAL_PAGES);
    }

    #[test]
    fn test_top_level_array() {
        let page = decode_search_page(b"[1, 2, 3]");
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
