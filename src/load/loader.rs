//! Loading configuration files into merged documents.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{DocumentParser, YamlParser};
use crate::error::LoadError;
use crate::merge::merge_documents;
use crate::value::Map;

/// Loader reads files and merges their documents with a pluggable parser.
#[derive(Debug, Clone, Default)]
pub struct Loader<P = YamlParser> {
    parser: P,
}

impl Loader<YamlParser> {
    /// Creates a loader backed by the YAML parser.
    pub fn new() -> Self {
        Loader { parser: YamlParser }
    }
}

impl<P: DocumentParser> Loader<P> {
    /// Creates a loader with a custom parser.
    pub fn with_parser(parser: P) -> Self {
        Loader { parser }
    }

    /// Reads `path` and merges its documents into one mapping.
    pub fn merge_file(&self, path: &Path) -> Result<Map, LoadError> {
        let text = fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
        self.merge_str(path, &text)
    }

    /// Merges the documents of already-read file text. `path` is only used
    /// for error reporting.
    pub fn merge_str(&self, path: &Path, text: &str) -> Result<Map, LoadError> {
        let documents = self
            .parser
            .parse_documents(text)
            .map_err(|e| LoadError::parse(path, e))?;
        debug!(path = %path.display(), documents = documents.len(), "parsed documents");
        Ok(merge_documents(documents))
    }
}

/// Reads a YAML file and merges its documents into one mapping.
pub fn merge_file(path: &Path) -> Result<Map, LoadError> {
    Loader::new().merge_file(path)
}
