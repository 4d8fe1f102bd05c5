#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_excessive_bools)]
//! Layout blocks for flex-layout pages.
//!
//! A page is built from [`Row`] and [`Col`] containers with leaf blocks
//! such as [`Text`] inside. Rows arrange their children horizontally,
//! columns vertically; a column must sit inside a row.
//!
//! ```
//! use flexlayout_blocks::{render, Col, Row, Text};
//! use flexlayout_core::RenderConfig;
//!
//! let row = Row::new().child(
//!     Col::new()
//!         .row_gap(5)
//!         .child(Text::new("A"))
//!         .child(Text::new("B")),
//! );
//! let rendered = render(&row, &RenderConfig::default()).unwrap();
//! assert!(rendered.diagnostics.is_empty());
//! assert!(rendered.to_html().contains("pb5"));
//! ```

mod block;
mod col;
mod page;
mod row;
mod text;

pub use block::{count_blocks, Block};
pub use col::{Col, ColLayout, ColProps};
pub use page::{render, render_in, schemas, Page, Rendered};
pub use row::{ColSizing, HorizontalAlign, Row, RowLayout, RowProps, VerticalAlign};
pub use text::{Text, TextProps};
