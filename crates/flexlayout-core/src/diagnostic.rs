//! Render diagnostics and the per-render context that collects them.

use crate::config::RenderConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of layout misuse detected during a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// A column placed directly inside another column
    ColInsideCol,
    /// A column with no enclosing row
    ColOutsideRow,
    /// A row placed directly inside another row
    RowInsideRow,
}

impl DiagnosticCode {
    /// Stable identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColInsideCol => "col-inside-col",
            Self::ColOutsideRow => "col-outside-row",
            Self::RowInsideRow => "row-inside-row",
        }
    }

    /// Human-readable explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ColInsideCol => {
                "A `flex-layout.col` is inserted directly into another `flex-layout.col`. This might have unpredictable behaviour."
            }
            Self::ColOutsideRow => {
                "A `flex-layout.col` is inserted directly into the page, but it needs to be inserted into a `flex-layout.row`. It will not be rendered."
            }
            Self::RowInsideRow => {
                "A `flex-layout.row` is inserted directly into another `flex-layout.row`. Wrap it in a `flex-layout.col` instead."
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A warning raised while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What went wrong
    pub code: DiagnosticCode,
    /// Explanation
    pub message: String,
    /// Identifier of the offending block, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.block {
            Some(block) => write!(f, "warning[{}] {block}: {}", self.code, self.message),
            None => write!(f, "warning[{}]: {}", self.code, self.message),
        }
    }
}

/// State threaded through one render pass.
///
/// Holds the configuration and collects diagnostics. Diagnostics are also
/// emitted as `tracing` warnings as they happen.
#[derive(Debug)]
pub struct RenderContext<'a> {
    config: &'a RenderConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RenderContext<'a> {
    /// Create a context for one render pass.
    #[must_use]
    pub const fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &'a RenderConfig {
        self.config
    }

    /// Record a warning.
    pub fn warn(&mut self, code: DiagnosticCode, block: Option<&str>) {
        tracing::warn!(code = code.as_str(), block = block.unwrap_or("-"), "{}", code.message());
        self.diagnostics.push(Diagnostic {
            code,
            message: code.message().to_string(),
            block: block.map(str::to_string),
        });
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Finish the pass and take the diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_collects() {
        let config = RenderConfig::default();
        let mut cx = RenderContext::new(&config);
        cx.warn(DiagnosticCode::ColOutsideRow, Some("flex-layout.col#a"));
        cx.warn(DiagnosticCode::ColInsideCol, None);

        let diags = cx.into_diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].code, DiagnosticCode::ColOutsideRow);
        assert_eq!(diags[0].block.as_deref(), Some("flex-layout.col#a"));
        assert_eq!(diags[1].message, DiagnosticCode::ColInsideCol.message());
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic {
            code: DiagnosticCode::RowInsideRow,
            message: "nested".to_string(),
            block: Some("flex-layout.row#x".to_string()),
        };
        assert_eq!(diag.to_string(), "warning[row-inside-row] flex-layout.row#x: nested");
    }

    #[test]
    fn test_code_serde_matches_as_str() {
        for code in [
            DiagnosticCode::ColInsideCol,
            DiagnosticCode::ColOutsideRow,
            DiagnosticCode::RowInsideRow,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
