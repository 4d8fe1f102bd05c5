#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unwrap_used)]
//! Core types for flex-layout blocks.
//!
//! This crate provides the pieces shared by the row and column blocks:
//! - Spacing scale: [`SpacingToken`], [`SpacingStep`], [`parse_gaps`],
//!   [`parse_margins`], [`parse_paddings`]
//! - Layout environment: [`LayoutEnv`], [`ParentKind`]
//! - Rendered output: [`Element`], [`Node`]
//! - CSS handles: [`CssNamespace`], [`generate_block_class`]
//! - Editor schema: [`BlockSchema`], [`MessageCatalog`]
//! - Render pass state: [`RenderConfig`], [`RenderContext`], [`Diagnostic`]

mod config;
pub mod css;
mod diagnostic;
mod element;
mod env;
mod error;
mod messages;
mod position;
mod spacing;

pub use config::RenderConfig;
pub use css::{generate_block_class, handles, is_css_length, CssNamespace};
pub use diagnostic::{Diagnostic, DiagnosticCode, RenderContext};
pub use element::{escape_html, Element, Node};
pub use env::{LayoutEnv, ParentKind};
pub use error::{ConfigError, LayoutError, MessageError, SpacingError};
pub use messages::{BlockSchema, LocalizedSchema, MessageCatalog, MessageDescriptor};
pub use position::{positioned, ChildPosition};
pub use spacing::{
    parse_gaps, parse_margins, parse_paddings, parse_token, Gaps, Side, Sides, SpacingStep,
    SpacingToken, MAX_STEP,
};
