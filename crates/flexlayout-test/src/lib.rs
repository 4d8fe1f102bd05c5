//! Testing harness for flex-layout pages.
//!
//! Renders a block or page and queries the element tree with CSS-like
//! selectors.
//!
//! ```
//! use flexlayout_blocks::{Col, Row, Text};
//! use flexlayout_test::Harness;
//!
//! let harness = Harness::new(
//!     Row::new().child(Col::new().row_gap(2).child(Text::new("a")).child(Text::new("b"))),
//! );
//! harness
//!     .assert_no_warnings()
//!     .assert_count(&harness.handle("flexColChild"), 2)
//!     .assert_count(".pb2", 1);
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
