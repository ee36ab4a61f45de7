//! Scalar leaf values and their equality semantics.

use std::fmt;

/// Scalar is a leaf of a document tree.
///
/// Equality is kind-aware: integers and floats compare numerically, while a
/// boolean never equals a number and null only equals null.
#[derive(Debug, Clone)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Renders the scalar and cuts it to at most `width` characters,
    /// ending with `...` when shortened.
    pub fn render_truncated(&self, width: usize) -> String {
        let width = width.max(4);
        let shown = self.to_string();
        if shown.chars().count() <= width {
            return shown;
        }
        let mut cut: String = shown.chars().take(width - 3).collect();
        cut.push_str("...");
        cut
    }

    /// Exact integer value, for either integer kind.
    fn as_integer(&self) -> Option<i128> {
        match self {
            Scalar::Int(i) => Some(i128::from(*i)),
            Scalar::UInt(u) => Some(i128::from(*u)),
            _ => None,
        }
    }
}

// 2^64 is exactly representable, so every integral float below it fits an
// i128 without rounding.
fn integer_eq_float(i: i128, f: f64) -> bool {
    f.fract() == 0.0 && f >= -(2f64.powi(63)) && f < 2f64.powi(64) && f as i128 == i
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Null, Scalar::Null) => true,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::String(a), Scalar::String(b)) => a == b,
            (Scalar::Float(f), n) | (n, Scalar::Float(f)) => n
                .as_integer()
                .is_some_and(|i| integer_eq_float(i, *f)),
            (a, b) => match (a.as_integer(), b.as_integer()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            Scalar::Float(x) if x.is_nan() => write!(f, ".nan"),
            Scalar::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { ".inf" } else { "-.inf" })
            }
            Scalar::Float(x) => write!(f, "{:?}", x),
            Scalar::String(s) => write!(f, "{:?}", s),
        }
    }
}
