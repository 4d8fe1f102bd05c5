//! Render configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! strict_nesting = false
//!
//! [css]
//! vendor = "vtex"
//! app = "flex-layout"
//! major = 0
//! ```

use crate::css::CssNamespace;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options that apply to a whole render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Namespace for CSS handles
    pub css: CssNamespace,
    /// Fail instead of warning when a column sits directly inside a column
    pub strict_nesting: bool,
}

impl RenderConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS namespace.
    #[must_use]
    pub fn with_css(mut self, css: CssNamespace) -> Self {
        self.css = css;
        self
    }

    /// Toggle strict nesting.
    #[must_use]
    pub const fn with_strict_nesting(mut self, strict: bool) -> Self {
        self.strict_nesting = strict;
        self
    }

    /// Parse a configuration from TOML.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RenderConfig::from_toml("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = RenderConfig::from_toml(
            r#"
strict_nesting = true

[css]
vendor = "acme"
app = "grid"
major = 3
"#,
        )
        .unwrap();
        assert!(config.strict_nesting);
        assert_eq!(config.css, CssNamespace::new("acme", "grid", 3));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(RenderConfig::from_toml("strict = true").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load(Path::new("/nonexistent/flexlayout.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flexlayout.toml");
        fs::write(&path, "[css]\nmajor = 1\n").unwrap();
        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.css.major, 1);
        assert_eq!(config.css.vendor, "vtex");
    }
}
