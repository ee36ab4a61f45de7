//! Value module - In-memory representation of configuration documents.
//!
//! Documents are trees of mappings and sequences with [`Scalar`] leaves.

mod scalar;
mod value;

pub use scalar::*;
pub use value::*;
