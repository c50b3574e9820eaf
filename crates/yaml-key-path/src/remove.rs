use serde_json::Value;

use crate::get::{parent_mut, sequence_index};
use crate::types::NodeKind;
use crate::KeyPathError;

/// Remove the node at `path` and return it.
///
/// All segments but the last must resolve. Removing an absent mapping key
/// is not an error and returns `Ok(None)`, so repeating a removal is
/// harmless. Removing from a sequence shifts later elements down; the
/// remaining entries of a mapping keep their order.
///
/// # Errors
///
/// - `KeyPathError::PathNotFound` - the parent could not be resolved
/// - `KeyPathError::InvalidIndex` - the parent is a sequence and the last
///   segment is not a non-negative integer
/// - `KeyPathError::IndexOutOfRange` - the index is past the end
/// - `KeyPathError::UnsupportedContainer` - the parent is a leaf
/// - `KeyPathError::MalformedKey` - `path` is empty
///
/// # Example
///
/// ```
/// use yaml_key_path::remove;
/// use serde_json::json;
///
/// let mut doc = json!([10, 20, 30]);
/// assert_eq!(remove(&mut doc, &["1".into()]).unwrap(), Some(json!(20)));
/// assert_eq!(doc, json!([10, 30]));
/// ```
pub fn remove(val: &mut Value, path: &[String]) -> Result<Option<Value>, KeyPathError> {
    let (parent, last, depth) = parent_mut(val, path)?;
    match parent {
        Value::Object(map) => Ok(map.shift_remove(last)),
        Value::Array(arr) => {
            let index = sequence_index(last, arr.len(), depth)?;
            Ok(Some(arr.remove(index)))
        }
        leaf => Err(KeyPathError::UnsupportedContainer {
            step: last.to_string(),
            depth,
            found: NodeKind::of(leaf),
        }),
    }
}
