//! Settings for the interactive shell.

use tracing::warn;

/// Environment variable overriding [`ShellConfig::field_width`].
pub const FIELD_WIDTH_VAR: &str = "BST_FIELD_WIDTH";

/// How the shell renders values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Width of the right-aligned field each value is printed in when listing the tree.
    pub field_width: usize,
    /// Width of the right-aligned fields of a search result (left child, node, right child).
    pub subtree_width: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            field_width: 7,
            subtree_width: 6,
        }
    }
}

impl ShellConfig {
    /// Reads the configuration from the process environment, keeping the default for anything
    /// unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(FIELD_WIDTH_VAR) {
            match raw.trim().parse() {
                Ok(width) => config.field_width = width,
                Err(err) => warn!(%raw, %err, "ignoring {}", FIELD_WIDTH_VAR),
            }
        }
        config
    }

    /// Returns this configuration with a different field width.
    pub fn with_field_width(self, field_width: usize) -> Self {
        Self {
            field_width,
            ..self
        }
    }
}
