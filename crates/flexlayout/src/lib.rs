//! Flexlayout: rows and columns for block-based storefront pages.
//!
//! Pages are trees of blocks. A [`blocks::Row`] lays its columns out
//! horizontally; a [`blocks::Col`] stacks its children vertically with a
//! bottom gap after every child but the last. Gaps, margins and paddings
//! are steps on a fixed spacing scale and render as utility classes.
//!
//! ```
//! use flexlayout::prelude::*;
//!
//! let page = Page::new().block(
//!     Row::new()
//!         .row_gap(4)
//!         .child(Col::new().child(Text::new("A")).child(Text::new("B"))),
//! );
//! let rendered = page.render(&RenderConfig::default()).unwrap();
//! assert!(rendered.to_html().contains("pb4"));
//! ```

#![allow(clippy::module_name_repetitions)]

pub use flexlayout_blocks as blocks;
pub use flexlayout_core::*;
pub use flexlayout_yaml as yaml;

use flexlayout_blocks::Rendered;
use flexlayout_yaml::{Manifest, ManifestError};
use thiserror::Error;

/// Commonly used types.
pub mod prelude {
    pub use flexlayout_blocks::{Block, Col, Page, Rendered, Row, Text};
    pub use flexlayout_core::{LayoutEnv, ParentKind, RenderConfig, SpacingStep, SpacingToken};
    pub use flexlayout_yaml::Manifest;
}

/// Error raised while rendering a manifest.
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest could not be loaded or resolved
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    /// Block tree could not be rendered
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Resolve and render a manifest.
///
/// # Errors
///
/// Returns an error if the manifest does not resolve or rendering fails.
pub fn render_manifest(manifest: &Manifest, config: &RenderConfig) -> Result<Rendered, Error> {
    let page = manifest.to_page()?;
    Ok(page.render(config)?)
}

/// Parse, resolve and render a YAML manifest.
///
/// # Errors
///
/// Returns an error if the YAML is invalid, the manifest does not resolve
/// or rendering fails.
pub fn render_yaml(yaml: &str, config: &RenderConfig) -> Result<Rendered, Error> {
    render_manifest(&Manifest::from_yaml(yaml)?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_yaml() {
        let rendered = render_yaml(
            "root: [flex-layout.row]\nblocks:\n  flex-layout.row:\n    children: [flex-layout.col]\n  flex-layout.col: {}\n",
            &RenderConfig::default(),
        )
        .unwrap();
        assert_eq!(rendered.nodes.len(), 1);
        assert!(rendered.diagnostics.is_empty());
    }

    #[test]
    fn test_error_sources() {
        let err = render_yaml("root: []", &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Manifest(ManifestError::EmptyRoot)));

        let err = render_yaml(
            "root: [flex-layout.row]\nblocks:\n  flex-layout.row:\n    props: { colGap: 1.5 }\n",
            &RenderConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Layout(LayoutError::Spacing(_))));
        assert!(err.to_string().contains("colGap"));
    }
}
