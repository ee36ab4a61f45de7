//! Recursive key-level merging of mapping documents.

use crate::value::{Map, Value};

/// Key under which a non-mapping root document is wrapped before merging.
pub const ROOT_WRAPPER_KEY: &str = "_";

/// Merges `overlay` onto `base`, returning a new mapping.
///
/// For each key of `overlay`: when both sides hold mappings they are merged
/// recursively; otherwise the overlay value replaces the base value whole,
/// including when only one side is a mapping. Neither input is modified.
pub fn deep_merge(base: &Map, overlay: &Map) -> Map {
    let mut out = base.clone();
    for (key, incoming) in overlay.iter() {
        let merged = match (out.get(key), incoming) {
            (Some(Value::Map(existing)), Value::Map(incoming)) => {
                Value::Map(deep_merge(existing, incoming))
            }
            _ => incoming.clone(),
        };
        out.set(key.as_str(), merged);
    }
    out
}

/// Folds an ordered list of documents into one mapping, left to right.
///
/// Null documents contribute nothing. Any other non-mapping document is
/// wrapped as `{_: document}` first.
pub fn merge_documents<I>(documents: I) -> Map
where
    I: IntoIterator<Item = Value>,
{
    documents
        .into_iter()
        .fold(Map::new(), |merged, document| match document {
            Value::Null => merged,
            Value::Map(map) => deep_merge(&merged, &map),
            other => {
                let mut wrapped = Map::new();
                wrapped.set(ROOT_WRAPPER_KEY, other);
                deep_merge(&merged, &wrapped)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_yaml;
    use pretty_assertions::assert_eq;

    fn map(yaml: &str) -> Map {
        match from_yaml(yaml).unwrap() {
            Value::Map(m) => m,
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_later_value_wins() {
        assert_eq!(deep_merge(&map("a: 1"), &map("a: 2")), map("a: 2"));
    }

    #[test]
    fn test_nested_mappings_merge() {
        assert_eq!(
            deep_merge(&map("a: {x: 1}"), &map("a: {y: 2}")),
            map("a: {x: 1, y: 2}")
        );
    }

    #[test]
    fn test_scalar_replaces_mapping() {
        assert_eq!(deep_merge(&map("a: {x: 1}"), &map("a: 5")), map("a: 5"));
    }

    #[test]
    fn test_mapping_replaces_scalar() {
        assert_eq!(deep_merge(&map("a: 5"), &map("a: {x: 1}")), map("a: {x: 1}"));
    }

    #[test]
    fn test_sequences_are_replaced_not_merged() {
        assert_eq!(
            deep_merge(&map("a: [1, 2, 3]"), &map("a: [9]")),
            map("a: [9]")
        );
    }

    #[test]
    fn test_null_overlay_value_replaces() {
        assert_eq!(deep_merge(&map("a: {x: 1}"), &map("a: ~")), map("a: ~"));
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let base = map("a: {x: 1}");
        let overlay = map("a: {y: 2}");
        let _ = deep_merge(&base, &overlay);
        assert_eq!(base, map("a: {x: 1}"));
        assert_eq!(overlay, map("a: {y: 2}"));
    }

    #[test]
    fn test_merge_documents_in_order() {
        let merged = merge_documents(vec![
            from_yaml("server: {port: 80, host: a}").unwrap(),
            Value::Null,
            from_yaml("server: {port: 8080}").unwrap(),
        ]);
        assert_eq!(merged, map("server: {port: 8080, host: a}"));
    }

    #[test]
    fn test_merge_documents_all_null() {
        let merged = merge_documents(vec![Value::Null, Value::Null]);
        assert!(merged.is_empty());
        assert!(merge_documents(Vec::new()).is_empty());
    }

    #[test]
    fn test_non_mapping_root_is_wrapped() {
        let merged = merge_documents(vec![Value::Bool(true)]);
        assert_eq!(merged, map("_: true"));

        let merged = merge_documents(vec![from_yaml("[1, 2]").unwrap(), from_yaml("a: 1").unwrap()]);
        assert_eq!(merged, map("{_: [1, 2], a: 1}"));
    }
}
