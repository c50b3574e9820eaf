//! Composite key paths for YAML/JSON trees.
//!
//! A composite key such as `"server.ports.0"` addresses exactly one node in a
//! tree of mappings (`Value::Object`) and sequences (`Value::Array`). This
//! crate splits keys into segments and resolves them against a tree to read,
//! overwrite, insert with creation of missing containers, or remove.
//!
//! Numeric segments index a sequence only when the node they are applied to
//! is a sequence; on a mapping `"0"` is an ordinary key.
//!
//! # Example
//!
//! ```
//! use yaml_key_path::{get_by_key, insert_by_key, tokenize};
//! use serde_json::json;
//!
//! assert_eq!(tokenize("a.b.2", false).unwrap(), vec!["a", "b", "2"]);
//!
//! let mut doc = json!({});
//! insert_by_key(&mut doc, "Organizations.0.Name", false, json!("org1")).unwrap();
//! assert_eq!(doc, json!({"Organizations": [{"Name": "org1"}]}));
//!
//! let name = get_by_key(&doc, "Organizations.0.Name", false).unwrap();
//! assert_eq!(name, &json!("org1"));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod types;
pub use types::{is_integer, is_negative_integer, parse_index, NodeKind, Path, PathStep};

pub mod tokenize;
pub use tokenize::{escape_segment, format_key, tokenize, unescape_segment};

pub mod get;
pub use get::{get, get_mut};

pub mod set;
pub use set::set;

pub mod insert;
pub use insert::insert;

pub mod remove;
pub use remove::remove;

pub mod validate;
pub use validate::{validate_path, validate_path_len, MAX_PATH_LENGTH};

/// Why a composite key was rejected by the tokenizer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("key is empty")]
    Empty,
    #[error("segment {0} is empty")]
    EmptySegment(usize),
    #[error("key ends with an unpaired escape character")]
    TrailingEscape,
}

/// Errors produced while tokenizing or resolving a composite key.
///
/// `depth` is the 0-based position of the failing segment in the path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("malformed key {key:?}: {reason}")]
    MalformedKey { key: String, reason: MalformedReason },
    #[error("key {step:?} not found at depth {depth}")]
    KeyNotFound { step: String, depth: usize },
    #[error("invalid sequence index {step:?} at depth {depth}")]
    InvalidIndex { step: String, depth: usize },
    #[error("index {index} out of range for sequence of length {len} at depth {depth}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        depth: usize,
    },
    #[error("reached a leaf before segment {step:?} at depth {depth}")]
    PathTooDeep { step: String, depth: usize },
    #[error("path not found at depth {depth}")]
    PathNotFound {
        depth: usize,
        #[source]
        source: Box<KeyPathError>,
    },
    #[error("cannot address {step:?} inside a {found} at depth {depth}")]
    UnsupportedContainer {
        step: String,
        depth: usize,
        found: NodeKind,
    },
    #[error("path has {len} segments, the limit is {max}")]
    PathTooLong { len: usize, max: usize },
}

impl KeyPathError {
    pub(crate) fn empty_path() -> Self {
        KeyPathError::MalformedKey {
            key: String::new(),
            reason: MalformedReason::Empty,
        }
    }

    /// Wrap a failed prefix traversal.
    pub(crate) fn path_not_found(source: KeyPathError) -> Self {
        KeyPathError::PathNotFound {
            depth: source.depth().unwrap_or(0),
            source: Box::new(source),
        }
    }

    /// Depth of the failing segment, when the error is tied to one.
    pub fn depth(&self) -> Option<usize> {
        match self {
            KeyPathError::KeyNotFound { depth, .. }
            | KeyPathError::InvalidIndex { depth, .. }
            | KeyPathError::IndexOutOfRange { depth, .. }
            | KeyPathError::PathTooDeep { depth, .. }
            | KeyPathError::PathNotFound { depth, .. }
            | KeyPathError::UnsupportedContainer { depth, .. } => Some(*depth),
            KeyPathError::MalformedKey { .. } | KeyPathError::PathTooLong { .. } => None,
        }
    }

    /// True if the error means "nothing lives at this key".
    ///
    /// Used by read-modify-write callers that treat a missing key as
    /// "no update performed".
    pub fn is_not_found(&self) -> bool {
        match self {
            KeyPathError::KeyNotFound { .. }
            | KeyPathError::IndexOutOfRange { .. }
            | KeyPathError::PathTooDeep { .. } => true,
            KeyPathError::PathNotFound { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Read the node at a composite key.
pub fn get_by_key<'a>(doc: &'a Value, key: &str, escape: bool) -> Result<&'a Value, KeyPathError> {
    let path = tokenize(key, escape)?;
    get(doc, &path)
}

/// Overwrite the node at a composite key, see [`set`].
pub fn set_by_key(
    doc: &mut Value,
    key: &str,
    escape: bool,
    value: Value,
) -> Result<Option<Value>, KeyPathError> {
    let path = tokenize(key, escape)?;
    set(doc, &path, value)
}

/// Write the node at a composite key, creating missing containers, see [`insert`].
pub fn insert_by_key(
    doc: &mut Value,
    key: &str,
    escape: bool,
    value: Value,
) -> Result<Option<Value>, KeyPathError> {
    let path = tokenize(key, escape)?;
    insert(doc, &path, value)
}

/// Remove the node at a composite key, see [`remove`].
pub fn remove_by_key(doc: &mut Value, key: &str, escape: bool) -> Result<Option<Value>, KeyPathError> {
    let path = tokenize(key, escape)?;
    remove(doc, &path)
}
