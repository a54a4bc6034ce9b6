//! Tolerant lookups into raw API JSON.
//!
//! The API's JSON is not structurally stable across resource states, so
//! projections read their fields defensively: a missing key yields `None`,
//! never an error. The request layer stays strict; see
//! [`take_items`] for the one listing shape it does insist on.

use serde_json::Value;

use crate::error::Error;

/// Walks `path` through nested objects, returning the value at the end.
pub(crate) fn pluck<'v>(data: &'v Value, path: &[&str]) -> Option<&'v Value> {
    let mut current = data;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// Looks up a string field.
pub(crate) fn pluck_str<'v>(data: &'v Value, path: &[&str]) -> Option<&'v str> {
    pluck(data, path).and_then(Value::as_str)
}

/// Looks up an unsigned integer field.
pub(crate) fn pluck_u64(data: &Value, path: &[&str]) -> Option<u64> {
    pluck(data, path).and_then(Value::as_u64)
}

/// Unwraps the `{"<collection>": {"items": [...]}}` shape every listing
/// endpoint responds with, taking ownership of the items.
pub(crate) fn take_items(
    response: &mut Value,
    path: &str,
    collection: &str,
) -> Result<Vec<Value>, Error> {
    match response
        .get_mut(collection)
        .and_then(|collection| collection.get_mut("items"))
    {
        Some(Value::Array(items)) => Ok(std::mem::take(items)),
        _ => Err(Error::Envelope {
            path: path.to_string(),
            field: format!("{collection}.items"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn pluck_walks_nested_objects() {
        let data = json!({"contact": {"email": "mayor@example.com"}});
        assert_eq!(
            pluck_str(&data, &["contact", "email"]),
            Some("mayor@example.com")
        );
    }

    #[rstest]
    #[case(&["contact", "phone"])]
    #[case(&["stats"])]
    #[case(&["contact", "email", "nested"])]
    fn pluck_misses_are_none(#[case] path: &[&str]) {
        let data = json!({"contact": {"email": "mayor@example.com"}});
        assert_eq!(pluck(&data, path), None);
    }

    #[rstest]
    fn pluck_u64_rejects_other_types() {
        let data = json!({"checkins": {"count": "many"}});
        assert_eq!(pluck_u64(&data, &["checkins", "count"]), None);
    }

    #[rstest]
    fn take_items_extracts_the_listing() {
        let mut response = json!({"friends": {"count": 2, "items": [{"id": "a"}, {"id": "b"}]}});
        let items = take_items(&mut response, "users/self/friends", "friends")
            .expect("items should unwrap");
        assert_eq!(items.len(), 2);
    }

    #[rstest]
    fn take_items_without_items_is_an_envelope_error() {
        let mut response = json!({"friends": {"count": 0}});
        let result = take_items(&mut response, "users/self/friends", "friends");
        assert!(matches!(result, Err(Error::Envelope { field, .. }) if field == "friends.items"));
    }
}
