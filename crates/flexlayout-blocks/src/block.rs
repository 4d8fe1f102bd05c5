//! The `Block` trait implemented by every renderable page block.

use flexlayout_core::{LayoutEnv, LayoutError, Node, RenderContext};

/// A renderable block.
///
/// Rendering is a pure function of the block, the environment it is
/// rendered in and the render configuration. Containers build a new
/// environment for their children and pass it down explicitly.
pub trait Block: Send + Sync {
    /// Block type name, e.g. `flex-layout.col`.
    fn block_type(&self) -> &'static str;

    /// Render this block.
    ///
    /// Returns `Ok(None)` when the block renders nothing.
    fn render(
        &self,
        env: &LayoutEnv,
        cx: &mut RenderContext<'_>,
    ) -> Result<Option<Node>, LayoutError>;

    /// Child blocks.
    fn children(&self) -> &[Box<dyn Block>] {
        &[]
    }

    /// Instance identifier (`type#name`), used in diagnostics.
    fn block_id(&self) -> Option<&str> {
        None
    }

    /// Test ID emitted as `data-testid`.
    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Total number of blocks in a tree, the root included.
#[must_use]
pub fn count_blocks(block: &dyn Block) -> usize {
    1 + block
        .children()
        .iter()
        .map(|child| count_blocks(child.as_ref()))
        .sum::<usize>()
}
