//! Checked conversion from decoded YAML into the editing tree.
//!
//! The tree only holds string mapping keys and finite numbers, so anything
//! else is rejected here rather than silently rewritten on the next save.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;
use yaml_key_path::format_key;

use crate::error::EditorError;

/// Decode YAML text into the editing tree.
pub fn from_yaml_str(text: &str) -> Result<Value, EditorError> {
    let yaml: YamlValue = serde_yaml::from_str(text).map_err(EditorError::Decode)?;
    yaml_to_json(yaml)
}

/// Convert a decoded YAML node.
///
/// # Errors
///
/// `EditorError::Unsupported` for a non-string mapping key, a `.nan` or
/// `.inf` float, or a tagged node, naming the composite key where it sits.
pub fn yaml_to_json(v: YamlValue) -> Result<Value, EditorError> {
    let mut path = Vec::new();
    convert(v, &mut path)
}

fn convert(v: YamlValue, path: &mut Vec<String>) -> Result<Value, EditorError> {
    Ok(match v {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(u) = n.as_u64() {
                Value::Number(Number::from(u))
            } else if let Some(i) = n.as_i64() {
                Value::Number(Number::from(i))
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| unsupported(path, format!("non-finite float {n}")))?
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                path.push(i.to_string());
                out.push(convert(item, path)?);
                path.pop();
            }
            Value::Array(out)
        }
        YamlValue::Mapping(entries) => {
            let mut out = Map::new();
            for (k, v) in entries {
                let key = match k {
                    YamlValue::String(s) => s,
                    other => {
                        return Err(unsupported(
                            path,
                            format!("non-string mapping key {}", describe(&other)),
                        ))
                    }
                };
                path.push(key.clone());
                let value = convert(v, path)?;
                path.pop();
                out.insert(key, value);
            }
            Value::Object(out)
        }
        YamlValue::Tagged(tagged) => {
            return Err(unsupported(path, format!("tagged value {}", tagged.tag)))
        }
    })
}

fn describe(v: &YamlValue) -> String {
    match v {
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => format!("{s:?}"),
        YamlValue::Sequence(_) => "(sequence)".to_string(),
        YamlValue::Mapping(_) => "(mapping)".to_string(),
        YamlValue::Tagged(tagged) => format!("(tagged {})", tagged.tag),
    }
}

fn unsupported(path: &[String], reason: String) -> EditorError {
    EditorError::Unsupported {
        key: format_key(path, true),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unsupported_at(text: &str) -> (String, String) {
        match from_yaml_str(text) {
            Err(EditorError::Unsupported { key, reason }) => (key, reason),
            other => panic!("expected unsupported node in {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_document() {
        let v = from_yaml_str("a: 1\nb: [x, -2, 1.5, true, ~]\n'8080': http\n").unwrap();
        assert_eq!(
            v,
            json!({"a": 1, "b": ["x", -2, 1.5, true, null], "8080": "http"})
        );
    }

    #[test]
    fn test_large_unsigned_integer() {
        let v = from_yaml_str("n: 18446744073709551615\n").unwrap();
        assert_eq!(v, json!({"n": u64::MAX}));
    }

    #[test]
    fn test_rejects_non_finite_floats() {
        let (key, reason) = unsupported_at("a: .nan\nc: 1\n");
        assert_eq!(key, "a");
        assert!(reason.contains("non-finite"), "{reason}");

        let (key, _) = unsupported_at("a:\n  - 1\n  - -.inf\n");
        assert_eq!(key, "a.1");
    }

    #[test]
    fn test_rejects_non_string_keys() {
        let (key, reason) = unsupported_at("ports:\n  8080: http\n");
        assert_eq!(key, "ports");
        assert_eq!(reason, "non-string mapping key 8080");

        let (key, reason) = unsupported_at("true: yes\n");
        assert_eq!(key, "");
        assert_eq!(reason, "non-string mapping key true");
    }

    #[test]
    fn test_rejects_tagged_values() {
        let (key, reason) = unsupported_at("hosts:\n  a.example: !Ref other\n");
        assert_eq!(key, "hosts.a\\.example");
        assert!(reason.starts_with("tagged value !Ref"), "{reason}");
    }
}
