//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error produced by a [`DocumentParser`](crate::load::DocumentParser).
pub type ParserError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// LoadError is a failure to read or parse one configuration file.
///
/// It is recoverable: the comparison that needed the file contributes no
/// findings and the run continues.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParserError,
    },
}

impl LoadError {
    /// Creates a read error.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<ParserError>) -> Self {
        LoadError::Parse {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Returns the path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }

    /// Renders only the underlying cause, without the path prefix.
    pub fn cause(&self) -> String {
        match self {
            LoadError::Read { source, .. } => source.to_string(),
            LoadError::Parse { source, .. } => source.to_string(),
        }
    }
}

/// CheckError aborts a whole run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("'{}' is not a directory.", .path.display())]
    InvalidRoot { path: PathBuf },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl CheckError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::InvalidRoot { .. } => 2,
            CheckError::Io(_) => 3,
        }
    }
}
