//! Flattening of document trees into (path, scalar) entries.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Path, PathElement};
use crate::value::{Scalar, Value};

/// FlatDocument maps canonical path strings to the scalar found there.
///
/// Entries iterate in ascending path order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatDocument {
    entries: BTreeMap<String, Scalar>,
}

impl FlatDocument {
    pub fn new() -> Self {
        FlatDocument {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, path: &str) -> Option<&Scalar> {
        self.entries.get(path)
    }

    pub fn has(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.entries.iter()
    }

    /// Inserts an entry, returning the scalar previously stored at `path`.
    pub fn insert(&mut self, path: impl Into<String>, value: Scalar) -> Option<Scalar> {
        self.entries.insert(path.into(), value)
    }
}

impl FromIterator<(String, Scalar)> for FlatDocument {
    fn from_iter<T: IntoIterator<Item = (String, Scalar)>>(iter: T) -> Self {
        FlatDocument {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Flattens a document into one entry per scalar leaf.
///
/// Mapping keys become field segments and sequence positions become index
/// segments. Tagged nodes contribute nothing. A scalar at the root renders
/// to the empty path, and entries with an empty path are dropped, so a bare
/// root scalar flattens to an empty document.
pub fn flatten(document: &Value) -> FlatDocument {
    let mut flat = FlatDocument::new();
    let mut path = Path::new();
    walk(document, &mut path, &mut flat);
    flat
}

fn walk(node: &Value, path: &mut Path, flat: &mut FlatDocument) {
    if let Some(scalar) = node.as_scalar() {
        let rendered = path.to_string();
        if rendered.is_empty() {
            return;
        }
        if let Some(previous) = flat.insert(rendered, scalar) {
            debug!(path = %path, previous = %previous, "flattened path collides with an earlier entry");
        }
        return;
    }

    match node {
        Value::Map(map) => {
            for (key, value) in map.iter() {
                path.push(PathElement::field_name(key.as_str()));
                walk(value, path, flat);
                path.pop();
            }
        }
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                path.push(PathElement::index(i));
                walk(item, path, flat);
                path.pop();
            }
        }
        _ => {}
    }
}
