use std::io;
use std::path::PathBuf;

use thiserror::Error;
use yaml_key_path::{KeyPathError, NodeKind};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    KeyPath(#[from] KeyPathError),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid YAML: {0}")]
    Decode(#[source] serde_yaml::Error),
    #[error("failed to encode YAML: {0}")]
    Encode(#[source] serde_yaml::Error),
    #[error("document root is a {0}, expected a mapping or sequence")]
    ScalarRoot(NodeKind),
    #[error("unsupported YAML at `{key}`: {reason}")]
    Unsupported { key: String, reason: String },
}

impl EditorError {
    /// The path error behind this error, if any.
    pub fn key_path(&self) -> Option<&KeyPathError> {
        match self {
            EditorError::KeyPath(e) => Some(e),
            _ => None,
        }
    }
}
