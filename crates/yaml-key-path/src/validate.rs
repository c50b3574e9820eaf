//! Limits for caller supplied paths.

use crate::KeyPathError;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

/// Validate a tokenized path against [`MAX_PATH_LENGTH`].
///
/// # Example
///
/// ```
/// use yaml_key_path::validate_path;
///
/// validate_path(&["foo".to_string(), "bar".to_string()]).unwrap();
/// validate_path(&(0..300).map(|i| i.to_string()).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[String]) -> Result<(), KeyPathError> {
    validate_path_len(path, MAX_PATH_LENGTH)
}

/// Validate a tokenized path against a caller chosen limit.
pub fn validate_path_len(path: &[String], max: usize) -> Result<(), KeyPathError> {
    if path.len() > max {
        return Err(KeyPathError::PathTooLong {
            len: path.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("k{i}")).collect()
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(validate_path(&segments(MAX_PATH_LENGTH)), Ok(()));
        assert_eq!(
            validate_path(&segments(MAX_PATH_LENGTH + 1)),
            Err(KeyPathError::PathTooLong {
                len: MAX_PATH_LENGTH + 1,
                max: MAX_PATH_LENGTH,
            })
        );
    }

    #[test]
    fn test_empty_path_passes() {
        assert_eq!(validate_path(&[]), Ok(()));
        assert_eq!(validate_path_len(&[], 0), Ok(()));
    }

    #[test]
    fn test_custom_limit_reports_len_and_max() {
        let path = segments(3);
        assert_eq!(validate_path_len(&path, 3), Ok(()));
        assert_eq!(
            validate_path_len(&path, 2),
            Err(KeyPathError::PathTooLong { len: 3, max: 2 })
        );
        assert_eq!(
            validate_path_len(&path, 0),
            Err(KeyPathError::PathTooLong { len: 3, max: 0 })
        );
    }
}
