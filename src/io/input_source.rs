//! Where operations are read from

use crate::types::AuthorizerError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Input stream of JSON-lines operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Error for an input file that cannot be opened
pub(crate) fn open_error(path: &Path, error: io::Error) -> AuthorizerError {
    AuthorizerError::IoError {
        message: format!("Failed to open file '{}': {}", path.display(), error),
    }
}
