//! Splitting composite keys into segments and formatting them back.

use crate::types::Path;
use crate::{KeyPathError, MalformedReason};

/// Segment delimiter.
pub const DELIMITER: char = '.';

/// Escape marker, only meaningful in escape mode and only before `.`.
pub const ESCAPE: char = '\\';

/// Split a composite key into its segments.
///
/// With `escape` disabled every `.` is a delimiter. With `escape` enabled a
/// `\.` pair is a literal dot inside the segment and any other `\` is kept
/// as is.
///
/// # Errors
///
/// `KeyPathError::MalformedKey` if the key is empty, has an empty segment
/// (leading, trailing or doubled delimiter), or, in escape mode, ends with
/// a lone `\`.
///
/// # Example
///
/// ```
/// use yaml_key_path::tokenize;
///
/// assert_eq!(tokenize("a.b.c", false).unwrap(), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("a\\.b.c", true).unwrap(), vec!["a.b", "c"]);
/// assert_eq!(tokenize("a\\.b.c", false).unwrap(), vec!["a\\", "b", "c"]);
/// assert!(tokenize("a..c", false).is_err());
/// ```
pub fn tokenize(key: &str, escape: bool) -> Result<Path, KeyPathError> {
    if key.is_empty() {
        return Err(malformed(key, MalformedReason::Empty));
    }
    let path = if escape {
        split_escaped(key)?
    } else {
        key.split(DELIMITER).map(str::to_string).collect()
    };
    if let Some(pos) = path.iter().position(String::is_empty) {
        return Err(malformed(key, MalformedReason::EmptySegment(pos)));
    }
    Ok(path)
}

/// Split on unescaped dots, then unescape each raw segment.
fn split_escaped(key: &str) -> Result<Path, KeyPathError> {
    let mut raw = Vec::new();
    let mut start = 0;
    let mut chars = key.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            ESCAPE => match chars.peek() {
                Some(&(_, DELIMITER)) => {
                    chars.next();
                }
                Some(_) => {}
                None => return Err(malformed(key, MalformedReason::TrailingEscape)),
            },
            DELIMITER => {
                raw.push(&key[start..i]);
                start = i + DELIMITER.len_utf8();
            }
            _ => {}
        }
    }
    raw.push(&key[start..]);
    Ok(raw.into_iter().map(unescape_segment).collect())
}

fn malformed(key: &str, reason: MalformedReason) -> KeyPathError {
    KeyPathError::MalformedKey {
        key: key.to_string(),
        reason,
    }
}

/// Escapes the dots of a segment for escape mode.
///
/// # Example
///
/// ```
/// use yaml_key_path::escape_segment;
///
/// assert_eq!(escape_segment("baidu.com"), "baidu\\.com");
/// assert_eq!(escape_segment("plain"), "plain");
/// ```
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains(DELIMITER) {
        return segment.to_string();
    }
    segment.replace('.', "\\.")
}

/// Unescapes a single escape-mode segment: every `\.` becomes `.` and any
/// other `\` is kept.
///
/// # Example
///
/// ```
/// use yaml_key_path::unescape_segment;
///
/// assert_eq!(unescape_segment("baidu\\.com"), "baidu.com");
/// assert_eq!(unescape_segment("c:\\dir"), "c:\\dir");
/// ```
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains(ESCAPE) {
        return segment.to_string();
    }
    segment.replace("\\.", ".")
}

/// Join segments into a composite key.
///
/// With `escape` enabled each segment is escaped first, so the result
/// tokenizes back to the same path. A segment ending with `\` cannot be
/// represented that way.
///
/// # Example
///
/// ```
/// use yaml_key_path::format_key;
///
/// let path = vec!["hosts".to_string(), "a.example".to_string()];
/// assert_eq!(format_key(&path, true), "hosts.a\\.example");
/// assert_eq!(format_key(&path, false), "hosts.a.example");
/// ```
pub fn format_key(path: &[String], escape: bool) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if escape {
            out.push_str(&escape_segment(segment));
        } else {
            out.push_str(segment);
        }
    }
    out
}
