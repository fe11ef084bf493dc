//! Typed view of the BPS WebAPI list response.
//!
//! The upstream payload is `{status, data: [paging, [items...], ...]}` where
//! `data` is a heterogeneous array: slot 0 carries paging metadata and slot 1
//! the actual items. All shape validation happens here, in one place, so the
//! rest of the bot only ever sees `Vec<Infographic>`.

use serde::Deserialize;
use serde_json::Value;

/// One infographic entry from the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Infographic {
    /// Display title
    pub title: String,
    /// URL of the preview image
    #[serde(rename = "img")]
    pub image_url: String,
    /// URL of the downloadable original, sometimes absent
    #[serde(rename = "dl", default)]
    pub download_url: String,
}

/// Top-level response envelope of the list endpoint
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<Vec<Value>>,
}

impl ApiResponse {
    /// Extract the item list, or `None` when the payload has no usable data.
    ///
    /// `None` covers `status != "OK"`, a missing `data` array, fewer than two
    /// slots in it, or an item slot that does not hold infographic entries.
    #[must_use]
    pub fn into_items(self) -> Option<Vec<Infographic>> {
        if self.status.as_deref() != Some("OK") {
            return None;
        }
        let mut data = self.data?;
        if data.len() < 2 {
            return None;
        }
        serde_json::from_value(data.swap_remove(1)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Option<Vec<Infographic>> {
        serde_json::from_value::<ApiResponse>(value)
            .ok()
            .and_then(ApiResponse::into_items)
    }

    #[test]
    fn test_ok_response_yields_items() {
        let value = json!({
            "status": "OK",
            "data": [
                {"page": 1, "pages": 3, "total": 25},
                [
                    {"title": "A", "img": "u1", "dl": "d1"},
                    {"title": "B", "img": "u2", "dl": "d2"}
                ]
            ]
        });

        let items = parse(value).expect("items expected");
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            Infographic {
                title: "A".to_string(),
                image_url: "u1".to_string(),
                download_url: "d1".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_item_slot_yields_empty_list() {
        let value = json!({"status": "OK", "data": [[], []]});
        let items = parse(value).expect("items expected");
        assert!(items.is_empty());
    }

    #[test]
    fn test_missing_download_url_defaults_to_empty() {
        let value = json!({
            "status": "OK",
            "data": [[], [{"title": "A", "img": "u1"}]]
        });
        let items = parse(value).expect("items expected");
        assert_eq!(items[0].download_url, "");
    }

    #[test]
    fn test_error_status_is_no_data() {
        let value = json!({"status": "ERROR", "data": [[], [{"title": "A", "img": "u1"}]]});
        assert!(parse(value).is_none());
    }

    #[test]
    fn test_short_data_array_is_no_data() {
        let value = json!({"status": "OK", "data": [[]]});
        assert!(parse(value).is_none());
    }

    #[test]
    fn test_missing_data_is_no_data() {
        let value = json!({"status": "OK"});
        assert!(parse(value).is_none());
    }

    #[test]
    fn test_unexpected_top_level_is_no_data() {
        assert!(parse(json!(["not", "an", "object"])).is_none());
        assert!(parse(json!({"status": "OK", "data": "oops"})).is_none());
    }
}
