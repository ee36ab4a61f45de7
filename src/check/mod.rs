//! Check module - Finding redundant overrides across a directory tree.
//!
//! A folder is checked when it holds `application.yaml` (or `.yml`); each
//! `application-<profile>.yaml` beside it is compared with that base.

mod checker;
mod discover;
mod options;
mod summary;


pub use checker::*;
pub use discover::*;
pub use options::*;
pub use summary::*;
