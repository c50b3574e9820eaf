//! Type definitions for composite key paths.

use std::fmt;

use serde_json::Value;

/// A single segment of a composite key.
///
/// Segments stay strings: whether a numeric segment indexes a sequence is
/// decided by the node it is applied to, not by its syntax.
pub type PathStep = String;

/// A tokenized composite key.
pub type Path = Vec<PathStep>;

/// Structural kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Keyed, insertion-ordered container (`Value::Object`).
    Mapping,
    /// Index-addressed container (`Value::Array`).
    Sequence,
    /// Any scalar: null, boolean, number or string.
    Leaf,
}

impl NodeKind {
    /// Classify a node by its runtime variant.
    pub fn of(val: &Value) -> Self {
        match val {
            Value::Object(_) => NodeKind::Mapping,
            Value::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Leaf,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::Leaf => "leaf",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a step as a sequence index candidate.
///
/// Only a non-empty run of ASCII digits that fits in `usize` qualifies.
/// Leading zeros are accepted (`"007"` is index 7).
///
/// # Example
///
/// ```
/// use yaml_key_path::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("012"), Some(12));
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("+1"), None);
/// assert_eq!(parse_index("name"), None);
/// ```
pub fn parse_index(step: &str) -> Option<usize> {
    if !is_integer(step) {
        return None;
    }
    step.parse().ok()
}

/// Check if a step consists only of ASCII digits.
///
/// Unlike [`parse_index`] this does not require the number to fit in
/// `usize`, so any digit run counts as a (possibly out of range) index.
pub fn is_integer(step: &str) -> bool {
    !step.is_empty() && step.bytes().all(|b| b.is_ascii_digit())
}

/// Check if a step is a negative integer such as `"-1"`.
pub fn is_negative_integer(step: &str) -> bool {
    step.strip_prefix('-').is_some_and(is_integer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_kind_of() {
        assert_eq!(NodeKind::of(&json!({})), NodeKind::Mapping);
        assert_eq!(NodeKind::of(&json!([])), NodeKind::Sequence);
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Leaf);
        assert_eq!(NodeKind::of(&json!("x")), NodeKind::Leaf);
        assert_eq!(NodeKind::of(&json!(1.5)), NodeKind::Leaf);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("00"), Some(0));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1.5"), None);
        assert_eq!(parse_index(" 1"), None);
        // Does not fit in usize
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("99999999999999999999999999"));
        assert!(!is_integer(""));
        assert!(!is_integer("-1"));
        assert!(!is_integer("1e3"));
    }

    #[test]
    fn test_is_negative_integer() {
        assert!(is_negative_integer("-1"));
        assert!(is_negative_integer("-20"));
        assert!(!is_negative_integer("-"));
        assert!(!is_negative_integer("1"));
        assert!(!is_negative_integer("-a"));
        assert!(!is_negative_integer("--1"));
    }
}
