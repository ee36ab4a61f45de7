//! Path element and path types.

use std::fmt;

/// PathElement represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathElement {
    /// Field name for mapping keys.
    FieldName(String),
    /// Position within a sequence.
    Index(usize),
}

impl PathElement {
    /// Creates a new field name path element.
    pub fn field_name(name: impl Into<String>) -> Self {
        PathElement::FieldName(name.into())
    }

    /// Creates a new index path element.
    pub fn index(i: usize) -> Self {
        PathElement::Index(i)
    }
}

/// Path represents a complete path from the document root to a node.
///
/// The canonical rendering joins field names with `.` and renders indices
/// as `[i]` with no dot, e.g. `http.routes[0].path`. A field name is
/// written without a dot while nothing has been rendered yet, so empty
/// keys vanish from the rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// Creates a path from a vector of elements.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn pop(&mut self) -> Option<PathElement> {
        self.elements.pop()
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::FieldName(name) => write!(f, ".{}", name),
            PathElement::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;
        for element in &self.elements {
            match element {
                PathElement::FieldName(name) if !written => {
                    write!(f, "{}", name)?;
                    written = !name.is_empty();
                }
                other => {
                    write!(f, "{}", other)?;
                    written = true;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_operations() {
        let mut path = Path::new();
        assert!(path.is_empty());

        path.push(PathElement::field_name("server"));
        path.push(PathElement::field_name("port"));
        assert_eq!(path.len(), 2);

        let popped = path.pop();
        assert_eq!(popped, Some(PathElement::FieldName("port".to_string())));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_path_display() {
        let path = Path::from_elements(vec![
            PathElement::field_name("http"),
            PathElement::field_name("routes"),
            PathElement::index(0),
            PathElement::field_name("path"),
        ]);
        assert_eq!(path.to_string(), "http.routes[0].path");
    }

    #[test]
    fn test_path_display_leading_index() {
        let path = Path::from_elements(vec![PathElement::index(1), PathElement::field_name("x")]);
        assert_eq!(path.to_string(), "[1].x");
    }

    #[test]
    fn test_path_display_nested_indices() {
        let path = Path::from_elements(vec![
            PathElement::field_name("matrix"),
            PathElement::index(0),
            PathElement::index(3),
        ]);
        assert_eq!(path.to_string(), "matrix[0][3]");
    }

    #[test]
    fn test_empty_leading_keys_add_no_dot() {
        let path = Path::from_elements(vec![
            PathElement::field_name(""),
            PathElement::field_name(""),
            PathElement::field_name("b"),
            PathElement::field_name("c"),
        ]);
        assert_eq!(path.to_string(), "b.c");
    }

    #[test]
    fn test_empty_key_after_content_keeps_dot() {
        let path = Path::from_elements(vec![
            PathElement::field_name("a"),
            PathElement::field_name(""),
            PathElement::field_name("b"),
        ]);
        assert_eq!(path.to_string(), "a..b");
    }

    #[test]
    fn test_empty_path_renders_empty() {
        assert_eq!(Path::new().to_string(), "");
    }
}
