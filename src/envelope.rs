//! Response-shape normalization.
//!
//! The backend is inconsistent about list envelopes: some endpoints return a
//! bare JSON array, most wrap it as `{data: [...], pagination: {...}}`, and
//! the search endpoints add one more layer (`{success, data: {data: [...]},
//! meta}`). Callers always get a flat `Vec<T>`; a body matching none of the
//! shapes means "no records", not a hard failure.

use crate::error::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalize a list response to its items.
///
/// Decision table, first match wins:
/// 1. bare array            -> its elements
/// 2. `{data: [...]}`       -> the `data` elements (`pagination` ignored)
/// 3. `{data: {data: [..]}}`-> the inner `data` elements
/// 4. anything else         -> empty
///
/// Element deserialization failures still surface as `Error::Json`; only the
/// envelope shape is forgiven.
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, Error> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(mut inner)) => match inner.remove("data") {
                Some(Value::Array(items)) => items,
                _ => return Ok(Vec::new()),
            },
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}

/// Normalize a single-record response, unwrapping one `{data: {...}}` layer
/// when present.
pub fn normalize_record<T: DeserializeOwned>(body: Value) -> Result<T, Error> {
    let record = match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner @ Value::Object(_)) => inner,
            Some(data) => {
                map.insert("data".to_string(), data);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(record).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn bare_array_returned_as_is() {
        let body = json!([{"id": "a"}, {"id": "b"}]);
        let items: Vec<Item> = normalize_list(body).unwrap();
        assert_eq!(
            items,
            vec![Item { id: "a".into() }, Item { id: "b".into() }]
        );
    }

    #[test]
    fn wrapped_array_unwrapped_and_pagination_ignored() {
        let body = json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "pagination": {"page": 1, "total": 2}
        });
        let items: Vec<Item> = normalize_list(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
    }

    #[test]
    fn nested_search_wrapper_unwrapped() {
        let body = json!({
            "success": true,
            "data": { "data": [{"id": "a"}], "total": 1 },
            "meta": {}
        });
        let items: Vec<Item> = normalize_list(body).unwrap();
        assert_eq!(items, vec![Item { id: "a".into() }]);
    }

    #[test]
    fn malformed_shapes_yield_empty_not_error() {
        for body in [
            json!(null),
            json!("oops"),
            json!(42),
            json!({"rows": [{"id": "a"}]}),
            json!({"data": "not-an-array"}),
            json!({"data": {"items": []}}),
        ] {
            let items: Vec<Item> = normalize_list(body).unwrap();
            assert!(items.is_empty());
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let body = json!({"data": [{"id": "a"}]});
        let once: Vec<Item> = normalize_list(body.clone()).unwrap();
        let renormalized: Vec<Item> =
            normalize_list(serde_json::to_value(normalize_list::<Value>(body).unwrap()).unwrap())
                .unwrap();
        assert_eq!(once, renormalized);
    }

    #[test]
    fn element_type_mismatch_still_errors() {
        let body = json!([{"id": 7}]);
        assert!(normalize_list::<Item>(body).is_err());
    }

    #[test]
    fn record_unwraps_single_data_layer() {
        let wrapped = json!({"data": {"id": "a"}});
        let bare = json!({"id": "a"});
        assert_eq!(normalize_record::<Item>(wrapped).unwrap().id, "a");
        assert_eq!(normalize_record::<Item>(bare).unwrap().id, "a");
    }
}
