//! Field path module - Paths into documents and the flattening of
//! documents into path-addressed scalar entries.

mod flatten;
mod path;

pub use flatten::*;
pub use path::*;
