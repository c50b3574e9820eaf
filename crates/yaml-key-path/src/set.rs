use serde_json::Value;

use crate::get::parent_mut;
use crate::types::{is_integer, is_negative_integer, parse_index, NodeKind};
use crate::KeyPathError;

/// Overwrite the node at `path`.
///
/// All segments but the last must already resolve. The last one is written
/// into its parent:
/// - mapping: the key is inserted or replaced, keeping its original position
/// - sequence: an in-range index replaces that element, any other integer
///   index (past the end or negative) appends
///
/// Returns the value that was replaced, `None` for a new key or an append.
///
/// # Errors
///
/// - `KeyPathError::PathNotFound` - the parent could not be resolved; the
///   tree is left untouched
/// - `KeyPathError::InvalidIndex` - the last segment is not an integer and
///   the parent is a sequence
/// - `KeyPathError::UnsupportedContainer` - the parent is a leaf
/// - `KeyPathError::MalformedKey` - `path` is empty
///
/// # Example
///
/// ```
/// use yaml_key_path::set;
/// use serde_json::json;
///
/// let mut doc = json!({"ports": [80, 443]});
/// let old = set(&mut doc, &["ports".into(), "0".into()], json!(8080)).unwrap();
/// assert_eq!(old, Some(json!(80)));
///
/// // Past the end: appended, no holes
/// set(&mut doc, &["ports".into(), "5".into()], json!(9090)).unwrap();
/// assert_eq!(doc, json!({"ports": [8080, 443, 9090]}));
/// ```
pub fn set(val: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, KeyPathError> {
    let (parent, last, depth) = parent_mut(val, path)?;
    write_slot(parent, last, depth, value)
}

/// Write `value` under `step` in `parent` with upsert/append semantics.
pub(crate) fn write_slot(
    parent: &mut Value,
    step: &str,
    depth: usize,
    value: Value,
) -> Result<Option<Value>, KeyPathError> {
    match parent {
        Value::Object(map) => Ok(map.insert(step.to_string(), value)),
        Value::Array(arr) => match parse_index(step) {
            Some(index) if index < arr.len() => Ok(Some(std::mem::replace(&mut arr[index], value))),
            _ if is_integer(step) || is_negative_integer(step) => {
                arr.push(value);
                Ok(None)
            }
            _ => Err(KeyPathError::InvalidIndex {
                step: step.to_string(),
                depth,
            }),
        },
        leaf => Err(KeyPathError::UnsupportedContainer {
            step: step.to_string(),
            depth,
            found: NodeKind::of(leaf),
        }),
    }
}
