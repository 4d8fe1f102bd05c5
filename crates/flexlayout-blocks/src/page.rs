//! Rendering entry points.

use flexlayout_core::{
    BlockSchema, Diagnostic, LayoutEnv, LayoutError, Node, RenderConfig, RenderContext,
};
use serde::Serialize;

use crate::block::Block;
use crate::col::Col;
use crate::row::Row;

/// Result of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Top-level nodes, one per block that rendered something
    pub nodes: Vec<Node>,
    /// Warnings raised during the pass
    pub diagnostics: Vec<Diagnostic>,
}

impl Rendered {
    /// Check if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if any warning was raised.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Concatenated HTML of all top-level nodes.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.nodes.iter().map(Node::to_html).collect()
    }
}

/// An ordered list of top-level blocks.
#[derive(Default)]
pub struct Page {
    blocks: Vec<Box<dyn Block>>,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").finish_non_exhaustive()
    }
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level block.
    #[must_use]
    pub fn block(mut self, block: impl Block + 'static) -> Self {
        self.blocks.push(Box::new(block));
        self
    }

    /// Add boxed top-level blocks.
    #[must_use]
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = Box<dyn Block>>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    /// Top-level blocks.
    #[must_use]
    pub fn blocks(&self) -> &[Box<dyn Block>] {
        &self.blocks
    }

    /// Render every top-level block in the root environment.
    pub fn render(&self, config: &RenderConfig) -> Result<Rendered, LayoutError> {
        let env = LayoutEnv::root();
        let mut cx = RenderContext::new(config);
        let mut nodes = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if let Some(node) = block.render(&env, &mut cx)? {
                nodes.push(node);
            }
        }
        Ok(Rendered {
            nodes,
            diagnostics: cx.into_diagnostics(),
        })
    }
}

/// Render a single block in the root environment.
pub fn render(block: &dyn Block, config: &RenderConfig) -> Result<Rendered, LayoutError> {
    render_in(block, &LayoutEnv::root(), config)
}

/// Render a single block in a given environment.
pub fn render_in(
    block: &dyn Block,
    env: &LayoutEnv,
    config: &RenderConfig,
) -> Result<Rendered, LayoutError> {
    let mut cx = RenderContext::new(config);
    let nodes: Vec<Node> = block.render(env, &mut cx)?.into_iter().collect();
    Ok(Rendered {
        nodes,
        diagnostics: cx.into_diagnostics(),
    })
}

/// Editor schemas of the layout blocks, keyed by block type.
#[must_use]
pub fn schemas() -> Vec<(&'static str, BlockSchema)> {
    vec![(Row::TYPE, Row::schema()), (Col::TYPE, Col::schema())]
}
