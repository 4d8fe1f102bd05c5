//! Turning a manifest into a block tree.

use flexlayout_blocks::{Block, Col, ColProps, Page, Row, RowProps, Text, TextProps};
use serde::de::DeserializeOwned;

use crate::error::ManifestError;
use crate::manifest::{BlockDecl, BlockId, Manifest};

/// Deepest nesting a manifest may declare; top-level blocks are at depth 1.
pub const MAX_DEPTH: usize = 64;

/// Most block instances one manifest may expand to. Shared references
/// count once per parent.
pub const MAX_BLOCKS: usize = 10_000;

impl Manifest {
    /// Build the page declared by this manifest.
    ///
    /// A block may be referenced from several parents; each reference
    /// builds its own instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is empty, an id is unknown or
    /// undeclared, a block contains itself, or props do not fit the type.
    /// Nesting past [`MAX_DEPTH`] fails with [`ManifestError::TooDeep`] and
    /// expanding past [`MAX_BLOCKS`] instances with
    /// [`ManifestError::TooManyBlocks`].
    pub fn to_page(&self) -> Result<Page, ManifestError> {
        if self.root.is_empty() {
            return Err(ManifestError::EmptyRoot);
        }
        let mut path = Vec::new();
        let mut built = 0;
        let blocks = self
            .root
            .iter()
            .map(|id| self.build(id, "root", &mut path, &mut built))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(top_level = blocks.len(), built, "manifest resolved");
        Ok(Page::new().with_blocks(blocks))
    }

    fn build<'m>(
        &'m self,
        id: &'m str,
        parent: &str,
        path: &mut Vec<&'m str>,
        built: &mut usize,
    ) -> Result<Box<dyn Block>, ManifestError> {
        if path.contains(&id) {
            let mut cycle: Vec<String> = path.iter().map(ToString::to_string).collect();
            cycle.push(id.to_string());
            return Err(ManifestError::CyclicReference { path: cycle });
        }
        if path.len() >= MAX_DEPTH {
            tracing::warn!(block = id, max = MAX_DEPTH, "manifest nests too deep");
            return Err(ManifestError::TooDeep {
                block: id.to_string(),
                max: MAX_DEPTH,
            });
        }
        *built += 1;
        if *built > MAX_BLOCKS {
            tracing::warn!(max = MAX_BLOCKS, "manifest expands to too many blocks");
            return Err(ManifestError::TooManyBlocks { max: MAX_BLOCKS });
        }
        let decl = self
            .blocks
            .get(id)
            .ok_or_else(|| ManifestError::MissingBlock {
                block: id.to_string(),
                parent: parent.to_string(),
            })?;

        path.push(id);
        let children = decl
            .children
            .iter()
            .map(|child| self.build(child, id, path, built))
            .collect::<Result<Vec<_>, _>>()?;
        path.pop();

        let block_type = BlockId::parse(id).block_type;
        let block: Box<dyn Block> = match block_type {
            Row::TYPE => Box::new(
                Row::from_props(props::<RowProps>(id, decl)?)
                    .with_id(id)
                    .with_children(children),
            ),
            Col::TYPE => Box::new(
                Col::from_props(props::<ColProps>(id, decl)?)
                    .with_id(id)
                    .with_children(children),
            ),
            Text::TYPE => {
                if !children.is_empty() {
                    return Err(ManifestError::UnexpectedChildren {
                        block: id.to_string(),
                    });
                }
                Box::new(Text::from_props(props::<TextProps>(id, decl)?).with_id(id))
            }
            other => {
                return Err(ManifestError::UnknownBlockType {
                    block: id.to_string(),
                    block_type: other.to_string(),
                })
            }
        };
        Ok(block)
    }
}

fn props<T: DeserializeOwned + Default>(id: &str, decl: &BlockDecl) -> Result<T, ManifestError> {
    if decl.props.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(decl.props.clone()).map_err(|source| ManifestError::InvalidProps {
        block: id.to_string(),
        source,
    })
}
