//! # Redundant Overrides
//!
//! Detects profile-specific configuration overrides that repeat the value
//! already set in the base file.
//!
//! For every folder holding an `application.yaml` (or `.yml`), each sibling
//! `application-<profile>.yaml` is merged, flattened into dotted paths and
//! compared with the base. Keys whose profile value equals the base value
//! are dead weight and are reported.
//!
//! ## Modules
//!
//! - [`value`] - Document trees and scalar leaves
//! - [`fieldpath`] - Paths into documents and flattening
//! - [`merge`] - Recursive merging of layered documents
//! - [`load`] - Reading and parsing multi-document files
//! - [`compare`] - Detection of duplicate values between base and profile
//! - [`check`] - Folder discovery, tree walking and reporting

pub mod check;
pub mod compare;
pub mod error;
pub mod fieldpath;
pub mod load;
pub mod merge;
pub mod value;

pub use check::{Checker, Options, Summary};
pub use compare::{compare, Duplicate};
pub use error::{CheckError, LoadError};
pub use fieldpath::{flatten, FlatDocument, Path, PathElement};
pub use load::{merge_file, DocumentParser, Loader, YamlParser};
pub use merge::{deep_merge, merge_documents};
pub use value::{Map, Scalar, Value};
