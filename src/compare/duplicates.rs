//! Finding profile entries that repeat the base value.

use std::fmt;

use crate::fieldpath::FlatDocument;
use crate::value::Scalar;

/// Duplicate is a profile entry whose value equals the base value at the
/// same path.
#[derive(Debug, Clone, PartialEq)]
pub struct Duplicate {
    /// Canonical path of the entry.
    pub path: String,
    /// The value shared by base and profile.
    pub value: Scalar,
}

impl Duplicate {
    pub fn new(path: impl Into<String>, value: Scalar) -> Self {
        Duplicate {
            path: path.into(),
            value,
        }
    }
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.path, self.value)
    }
}

/// Returns every path of `profile` that also exists in `base` with an equal
/// scalar, sorted by path.
///
/// Paths only present in `base` are never reported.
pub fn compare(base: &FlatDocument, profile: &FlatDocument) -> Vec<Duplicate> {
    let mut duplicates: Vec<Duplicate> = profile
        .iter()
        .filter(|(path, value)| base.get(path) == Some(*value))
        .map(|(path, value)| Duplicate::new(path.as_str(), value.clone()))
        .collect();
    duplicates.sort_by(|a, b| a.path.cmp(&b.path));
    duplicates
}
