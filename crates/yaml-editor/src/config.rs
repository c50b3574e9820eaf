//! Editor options.
//!
//! Options are a plain value handed to every document and file operation;
//! there is no process-wide state.

use yaml_key_path::MAX_PATH_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    escape_keys: bool,
    create_dirs: bool,
    max_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            escape_keys: false,
            create_dirs: true,
            max_depth: MAX_PATH_LENGTH,
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `\.` in composite keys as a literal dot.
    pub fn with_escape_keys(mut self, escape_keys: bool) -> Self {
        self.escape_keys = escape_keys;
        self
    }

    /// Create missing parent directories when saving a file.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Reject keys with more segments than `max_depth`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn escape_keys(&self) -> bool {
        self.escape_keys
    }

    pub fn create_dirs(&self) -> bool {
        self.create_dirs
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
