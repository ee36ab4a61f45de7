//! Parsing capability used by the loader.

use serde::Deserialize;

use crate::value::Value;

/// DocumentParser turns file text into its ordered list of documents.
pub trait DocumentParser {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parses every document in `text`, in file order. Empty documents
    /// are returned as [`Value::Null`].
    fn parse_documents(&self, text: &str) -> Result<Vec<Value>, Self::Error>;
}

/// YamlParser parses multi-document YAML (`---` separated).
///
/// Anchors and aliases are expanded, and `<<` merge keys are resolved
/// within each document.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    type Error = serde_yaml::Error;

    fn parse_documents(&self, text: &str) -> Result<Vec<Value>, Self::Error> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(text) {
            let mut value = serde_yaml::Value::deserialize(document)?;
            value.apply_merge()?;
            documents.push(Value::from(value));
        }
        Ok(documents)
    }
}
