//! Run options.

/// Default cap on the rendered width of a duplicated value.
pub const DEFAULT_VALUE_WIDTH: usize = 80;

/// Options controls how a check run reports its findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of characters used to render a duplicated value.
    pub value_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            value_width: DEFAULT_VALUE_WIDTH,
        }
    }
}

impl Options {
    pub fn with_value_width(mut self, width: usize) -> Self {
        self.value_width = width;
        self
    }
}
