//! Error types for flexlayout-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving spacing tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpacingError {
    /// Token is not an integer step on the spacing scale.
    #[error("invalid spacing token for `{prop}`: {value} (expected an integer between 0 and {max})")]
    InvalidSpacingToken {
        /// Prop the token was read from
        prop: String,
        /// Offending value as written
        value: String,
        /// Highest valid step
        max: u8,
    },
}

/// Errors raised while rendering a block tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A spacing prop could not be resolved.
    #[error(transparent)]
    Spacing(#[from] SpacingError),

    /// A column was placed directly inside another column with strict nesting on.
    #[error("column{} is nested directly inside another column", block_suffix(.block.as_deref()))]
    NestedCol {
        /// Block identifier, when known
        block: Option<String>,
    },

    /// A CSS length prop is not a single length.
    #[error("invalid value for `{prop}`: {value:?}")]
    InvalidLength {
        /// Prop name
        prop: String,
        /// Offending value
        value: String,
    },
}

fn block_suffix(block: Option<&str>) -> String {
    block.map(|b| format!(" `{b}`")).unwrap_or_default()
}

/// Errors raised while loading a render configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for a render config.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised while loading locale messages.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Message file or directory could not be read.
    #[error("failed to read messages from {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Message file is not a flat JSON object of strings.
    #[error("invalid messages for locale `{locale}`: {source}")]
    Json {
        /// Locale being loaded
        locale: String,
        /// Underlying error
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_error_display() {
        let err = SpacingError::InvalidSpacingToken {
            prop: "rowGap".to_string(),
            value: "\"big\"".to_string(),
            max: 11,
        };
        assert_eq!(
            err.to_string(),
            "invalid spacing token for `rowGap`: \"big\" (expected an integer between 0 and 11)"
        );
    }

    #[test]
    fn test_layout_error_from_spacing() {
        let err: LayoutError = SpacingError::InvalidSpacingToken {
            prop: "colGap".to_string(),
            value: "-1".to_string(),
            max: 11,
        }
        .into();
        assert!(matches!(err, LayoutError::Spacing(_)));
        assert!(err.to_string().starts_with("invalid spacing token"));
    }

    #[test]
    fn test_nested_col_display() {
        let err = LayoutError::NestedCol { block: None };
        assert_eq!(err.to_string(), "column is nested directly inside another column");

        let err = LayoutError::NestedCol {
            block: Some("flex-layout.col#inner".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "column `flex-layout.col#inner` is nested directly inside another column"
        );
    }
}
