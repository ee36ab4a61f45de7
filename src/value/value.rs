//! Document tree types and conversion from parsed YAML.

use std::collections::BTreeMap;
use std::fmt;

use super::Scalar;

/// Value is one node of a structured configuration document.
///
/// A node is exactly one of mapping, sequence or scalar, except for
/// `Tagged`, which carries an explicitly tagged node (`!tag value`) that
/// the flattener treats as opaque.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    Tagged(Box<Tagged>),
}

/// Map represents a mapping node. Keys are the textual form of the YAML key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    pub fields: BTreeMap<String, Value>,
}

/// Tagged is a node carrying an explicit YAML tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub tag: String,
    pub value: Value,
}

impl Value {
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the scalar carried by this node, or None for containers and
    /// tagged nodes.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Null => Some(Scalar::Null),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Int(i) => Some(Scalar::Int(*i)),
            Value::UInt(u) => Some(Scalar::UInt(*u)),
            Value::Float(f) => Some(Scalar::Float(*f)),
            Value::String(s) => Some(Scalar::String(s.clone())),
            Value::List(_) | Value::Map(_) | Value::Tagged(_) => None,
        }
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => number_to_value(&n),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(seq) => {
                Value::List(seq.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => Value::Map(
                mapping
                    .into_iter()
                    .map(|(k, v)| (key_to_string(&k), Value::from(v)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => {
                let serde_yaml::value::TaggedValue { tag, value } = *tagged;
                Value::Tagged(Box::new(Tagged {
                    tag: tag.to_string(),
                    value: Value::from(value),
                }))
            }
        }
    }
}

fn number_to_value(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt(u)
    } else {
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Renders a YAML mapping key as a field name.
///
/// Non-string keys (`8080:`, `true:`) use their plain textual form.
fn key_to_string(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Tagged(tagged) => {
            format!("{} {}", tagged.tag, key_to_string(&tagged.value))
        }
        complex => serde_yaml::to_string(complex)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Tagged(tagged) => write!(f, "{} {}", tagged.tag, tagged.value),
            scalar => match scalar.as_scalar() {
                Some(s) => write!(f, "{}", s),
                None => Ok(()),
            },
        }
    }
}

/// Parse a single YAML document into a Value.
pub fn from_yaml(yaml: &str) -> Result<Value, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    Ok(Value::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_as_map() {
        assert!(Value::Map(Map::new()).as_map().is_some());
        assert!(Value::Null.as_map().is_none());
        assert!(Value::List(vec![]).as_map().is_none());
    }

    #[test]
    fn test_as_scalar_excludes_containers() {
        assert_eq!(Value::Int(8080).as_scalar(), Some(Scalar::Int(8080)));
        assert_eq!(Value::Null.as_scalar(), Some(Scalar::Null));
        assert!(Value::List(vec![]).as_scalar().is_none());
        assert!(Value::Map(Map::new()).as_scalar().is_none());
        let tagged = Value::Tagged(Box::new(Tagged {
            tag: "!secret".into(),
            value: Value::String("x".into()),
        }));
        assert!(tagged.as_scalar().is_none());
    }

    #[test]
    fn test_map_operations() {
        let mut map = Map::new();
        assert!(map.is_empty());

        map.set("key", Value::String("value".into()));
        assert!(map.has("key"));
        assert_eq!(map.get("key"), Some(&Value::String("value".into())));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_from_yaml_scalars() {
        let value = from_yaml("port: 8080\nratio: 0.5\non: true\nname: svc\nempty:\n").unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("port"), Some(&Value::Int(8080)));
        assert_eq!(map.get("ratio"), Some(&Value::Float(0.5)));
        assert_eq!(map.get("on"), Some(&Value::Bool(true)));
        assert_eq!(map.get("name"), Some(&Value::String("svc".into())));
        assert_eq!(map.get("empty"), Some(&Value::Null));
    }

    #[test]
    fn test_quoted_number_stays_string() {
        let value = from_yaml("port: \"8080\"").unwrap();
        assert_eq!(
            value.as_map().unwrap().get("port"),
            Some(&Value::String("8080".into()))
        );
    }

    #[test]
    fn test_non_string_keys_render_as_text() {
        let value = from_yaml("8080: http\ntrue: yes\n~: nothing\n").unwrap();
        let map = value.as_map().unwrap();
        assert!(map.has("8080"));
        assert!(map.has("true"));
        assert!(map.has("null"));
    }

    #[test]
    fn test_tagged_node() {
        let value = from_yaml("password: !vault abc").unwrap();
        match value.as_map().unwrap().get("password") {
            Some(Value::Tagged(tagged)) => {
                assert_eq!(tagged.tag, "!vault");
                assert_eq!(tagged.value, Value::String("abc".into()));
            }
            other => panic!("expected tagged node, got {:?}", other),
        }
    }

    #[test]
    fn test_large_unsigned_stays_exact() {
        let value = from_yaml("big: 18446744073709551615
small: -5
").unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("big"), Some(&Value::UInt(u64::MAX)));
        assert_eq!(map.get("small"), Some(&Value::Int(-5)));
    }

    #[test]
    fn test_display() {
        let value = from_yaml("a: [1, x]\n").unwrap();
        assert_eq!(value.to_string(), r#"{"a": [1, "x"]}"#);
    }
}
