use serde_json::{Map, Value};

use crate::set::write_slot;
use crate::types::{is_integer, is_negative_integer, parse_index};
use crate::KeyPathError;

/// Write `value` at `path`, creating every missing container on the way.
///
/// The kind of a created container follows the segment that will be applied
/// to it: a sequence when that segment is a non-negative integer, a mapping
/// otherwise. Indexing a sequence past its end appends instead of leaving a
/// hole, and an explicit `null` on the way is replaced like a missing node.
/// The last segment is written with the same rules as [`crate::set`].
///
/// Containers are attached as the walk proceeds. Every container created
/// already has the kind its next segment needs, so failures only come from
/// nodes that existed before the call and are met before anything is
/// attached.
///
/// # Errors
///
/// - `KeyPathError::PathTooDeep` - an existing leaf sits where the path
///   needs a container
/// - `KeyPathError::InvalidIndex` - a non-integer segment applied to an
///   existing sequence
/// - `KeyPathError::UnsupportedContainer` - the last parent is a leaf
/// - `KeyPathError::MalformedKey` - `path` is empty
///
/// # Example
///
/// ```
/// use yaml_key_path::insert;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// insert(&mut doc, &["a".into(), "0".into(), "b".into()], json!("v")).unwrap();
/// assert_eq!(doc, json!({"a": [{"b": "v"}]}));
/// ```
pub fn insert(val: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, KeyPathError> {
    let (last, prefix) = path.split_last().ok_or_else(KeyPathError::empty_path)?;
    let mut current = val;
    for (depth, step) in prefix.iter().enumerate() {
        let next = &path[depth + 1];
        current = vivify_child(current, step, next, depth)?;
    }
    write_slot(current, last, prefix.len(), value)
}

/// An empty container suited to receive `next_step`.
fn container_for(next_step: &str) -> Value {
    if is_integer(next_step) {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn vivify_child<'a>(
    node: &'a mut Value,
    step: &str,
    next_step: &str,
    depth: usize,
) -> Result<&'a mut Value, KeyPathError> {
    match node {
        Value::Object(map) => {
            let child = map.entry(step).or_insert(Value::Null);
            if child.is_null() {
                *child = container_for(next_step);
            }
            Ok(child)
        }
        Value::Array(arr) => match parse_index(step) {
            Some(index) if index < arr.len() => {
                let child = &mut arr[index];
                if child.is_null() {
                    *child = container_for(next_step);
                }
                Ok(child)
            }
            _ if is_integer(step) || is_negative_integer(step) => {
                arr.push(container_for(next_step));
                let index = arr.len() - 1;
                Ok(&mut arr[index])
            }
            _ => Err(KeyPathError::InvalidIndex {
                step: step.to_string(),
                depth,
            }),
        },
        _ => Err(KeyPathError::PathTooDeep {
            step: step.to_string(),
            depth,
        }),
    }
}
