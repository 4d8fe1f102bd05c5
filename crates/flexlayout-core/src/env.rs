//! Layout environment handed from a container to its subtree.
//!
//! Every block is rendered with the environment of its nearest layout
//! container. A container never mutates the environment it received; it
//! builds a fresh one with [`LayoutEnv::provide`] and passes that to its
//! children, so siblings and ancestors are unaffected.

use crate::spacing::{Gaps, SpacingStep};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of the nearest enclosing layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    /// No layout container encloses the block
    #[default]
    None,
    /// Nearest container is a row
    Row,
    /// Nearest container is a column
    Col,
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Row => "row",
            Self::Col => "col",
        };
        f.write_str(name)
    }
}

/// Environment a block is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutEnv {
    parent: ParentKind,
    gaps: Gaps,
}

impl LayoutEnv {
    /// Environment outside of any layout container: no parent, zero gaps.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            parent: ParentKind::None,
            gaps: Gaps::NONE,
        }
    }

    /// Environment a container of kind `parent` hands to its children.
    #[must_use]
    pub const fn provide(parent: ParentKind, gaps: Gaps) -> Self {
        Self { parent, gaps }
    }

    /// Kind of the nearest container.
    #[must_use]
    pub const fn parent(&self) -> ParentKind {
        self.parent
    }

    /// Gaps published by the nearest container.
    #[must_use]
    pub const fn gaps(&self) -> Gaps {
        self.gaps
    }

    /// Inherited column gap.
    #[must_use]
    pub const fn col_gap(&self) -> SpacingStep {
        self.gaps.col_gap
    }

    /// Inherited row gap.
    #[must_use]
    pub const fn row_gap(&self) -> SpacingStep {
        self.gaps.row_gap
    }

    /// Check if no container encloses this environment.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.parent, ParentKind::None)
    }
}
