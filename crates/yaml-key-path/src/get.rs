use serde_json::Value;

use crate::types::{is_integer, parse_index};
use crate::KeyPathError;

/// Read the node at `path`.
///
/// Each segment is applied according to the runtime kind of the current
/// node: a mapping looks the segment up as a key, a sequence parses it as an
/// index. The node at the last segment is returned whatever its kind. An
/// empty path returns `val` itself.
///
/// # Errors
///
/// - `KeyPathError::KeyNotFound` - a mapping has no such key
/// - `KeyPathError::InvalidIndex` - a sequence segment is not a non-negative integer
/// - `KeyPathError::IndexOutOfRange` - a sequence index is past the end
/// - `KeyPathError::PathTooDeep` - a leaf was reached with segments left
///
/// # Example
///
/// ```
/// use yaml_key_path::get;
/// use serde_json::json;
///
/// let doc = json!({"a": {"0": "key", "b": ["x", "y"]}});
/// assert_eq!(get(&doc, &["a".into(), "b".into(), "1".into()]).unwrap(), &json!("y"));
/// // "0" is a plain key on a mapping
/// assert_eq!(get(&doc, &["a".into(), "0".into()]).unwrap(), &json!("key"));
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, KeyPathError> {
    let mut current = val;
    for (depth, step) in path.iter().enumerate() {
        current = child(current, step, depth)?;
    }
    Ok(current)
}

/// Mutable counterpart of [`get`], with the same errors.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Result<&'a mut Value, KeyPathError> {
    let mut current = val;
    for (depth, step) in path.iter().enumerate() {
        current = child_mut(current, step, depth)?;
    }
    Ok(current)
}

fn child<'a>(node: &'a Value, step: &str, depth: usize) -> Result<&'a Value, KeyPathError> {
    match node {
        Value::Object(map) => map.get(step).ok_or_else(|| KeyPathError::KeyNotFound {
            step: step.to_string(),
            depth,
        }),
        Value::Array(arr) => {
            let index = sequence_index(step, arr.len(), depth)?;
            Ok(&arr[index])
        }
        _ => Err(KeyPathError::PathTooDeep {
            step: step.to_string(),
            depth,
        }),
    }
}

fn child_mut<'a>(node: &'a mut Value, step: &str, depth: usize) -> Result<&'a mut Value, KeyPathError> {
    match node {
        Value::Object(map) => map.get_mut(step).ok_or_else(|| KeyPathError::KeyNotFound {
            step: step.to_string(),
            depth,
        }),
        Value::Array(arr) => {
            let index = sequence_index(step, arr.len(), depth)?;
            Ok(&mut arr[index])
        }
        _ => Err(KeyPathError::PathTooDeep {
            step: step.to_string(),
            depth,
        }),
    }
}

/// Resolve `step` to an existing position in a sequence of `len` elements.
///
/// A digit run too large for `usize` is out of range, reported with the
/// index saturated to `usize::MAX`.
pub(crate) fn sequence_index(step: &str, len: usize, depth: usize) -> Result<usize, KeyPathError> {
    let index = match parse_index(step) {
        Some(index) => index,
        None if is_integer(step) => usize::MAX,
        None => {
            return Err(KeyPathError::InvalidIndex {
                step: step.to_string(),
                depth,
            })
        }
    };
    if index >= len {
        return Err(KeyPathError::IndexOutOfRange { index, len, depth });
    }
    Ok(index)
}

/// Resolve everything but the last segment for a write or delete.
///
/// Returns the parent node, the last segment and its depth. Traversal
/// failures are reported as `KeyPathError::PathNotFound`; nothing is
/// modified on failure.
pub(crate) fn parent_mut<'a, 'p>(
    val: &'a mut Value,
    path: &'p [String],
) -> Result<(&'a mut Value, &'p str, usize), KeyPathError> {
    let (last, prefix) = path.split_last().ok_or_else(KeyPathError::empty_path)?;
    let parent = get_mut(val, prefix).map_err(KeyPathError::path_not_found)?;
    Ok((parent, last.as_str(), prefix.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(key: &str) -> Vec<String> {
        key.split('.').map(str::to_string).collect()
    }

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]).unwrap(), &doc);
    }

    #[test]
    fn test_get_returns_containers() {
        let doc = json!({"a": {"b": [1, 2]}});
        assert_eq!(get(&doc, &p("a")).unwrap(), &json!({"b": [1, 2]}));
        assert_eq!(get(&doc, &p("a.b")).unwrap(), &json!([1, 2]));
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = json!({"a": null});
        assert_eq!(get(&doc, &p("a")).unwrap(), &Value::Null);
    }

    #[test]
    fn test_get_key_not_found() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(
            get(&doc, &p("a.c")),
            Err(KeyPathError::KeyNotFound {
                step: "c".into(),
                depth: 1,
            })
        );
    }

    #[test]
    fn test_get_invalid_index() {
        let doc = json!({"a": [1, 2, 3]});
        assert_eq!(
            get(&doc, &p("a.first")),
            Err(KeyPathError::InvalidIndex {
                step: "first".into(),
                depth: 1,
            })
        );
        assert!(matches!(
            get(&doc, &p("a.-1")),
            Err(KeyPathError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_get_index_out_of_range() {
        let doc = json!([[1, 2]]);
        assert_eq!(
            get(&doc, &p("0.2")),
            Err(KeyPathError::IndexOutOfRange {
                index: 2,
                len: 2,
                depth: 1,
            })
        );
    }

    #[test]
    fn test_get_index_past_usize() {
        let doc = json!({"s": [1]});
        assert_eq!(
            get(&doc, &p("s.99999999999999999999999")),
            Err(KeyPathError::IndexOutOfRange {
                index: usize::MAX,
                len: 1,
                depth: 1,
            })
        );
    }

    #[test]
    fn test_get_path_too_deep() {
        let doc = json!({"a": "leaf"});
        assert_eq!(
            get(&doc, &p("a.b.c")),
            Err(KeyPathError::PathTooDeep {
                step: "b".into(),
                depth: 1,
            })
        );
    }

    #[test]
    fn test_get_numeric_key_on_mapping() {
        let doc = json!({"ports": {"8080": "http"}});
        assert_eq!(get(&doc, &p("ports.8080")).unwrap(), &json!("http"));
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut doc = json!({"a": [{"b": 1}]});
        *get_mut(&mut doc, &p("a.0.b")).unwrap() = json!(2);
        assert_eq!(doc, json!({"a": [{"b": 2}]}));
        assert!(get_mut(&mut doc, &p("a.1")).is_err());
    }

    #[test]
    fn test_parent_mut() {
        let mut doc = json!({"a": {"b": 1}});
        let path = p("a.b");
        let (parent, last, depth) = parent_mut(&mut doc, &path).unwrap();
        assert_eq!(parent, &json!({"b": 1}));
        assert_eq!(last, "b");
        assert_eq!(depth, 1);

        let path = p("x.b");
        match parent_mut(&mut doc, &path) {
            Err(KeyPathError::PathNotFound { depth, source }) => {
                assert_eq!(depth, 0);
                assert!(matches!(*source, KeyPathError::KeyNotFound { .. }));
            }
            other => panic!("expected PathNotFound, got {other:?}"),
        }

        assert!(matches!(
            parent_mut(&mut doc, &[]),
            Err(KeyPathError::MalformedKey { .. })
        ));
    }
}
