//! Merge module - Folding layered documents into one logical document.

mod deep_merge;

pub use deep_merge::*;
