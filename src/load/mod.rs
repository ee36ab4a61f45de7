//! Load module - Reading configuration files into merged documents.

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
