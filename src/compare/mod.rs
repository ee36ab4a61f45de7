//! Compare module - Detecting redundant profile overrides.

mod duplicates;

pub use duplicates::*;
