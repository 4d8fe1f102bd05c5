//! Block manifests for flex-layout pages.
//!
//! A manifest lists the page's top-level block ids under `root` and
//! declares every block under `blocks`, each with its props and the ids of
//! its children.

mod error;
mod manifest;
mod resolve;

pub use error::ManifestError;
pub use manifest::{BlockDecl, BlockId, Manifest};
pub use resolve::{MAX_BLOCKS, MAX_DEPTH};
