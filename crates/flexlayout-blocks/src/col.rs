//! Column block for vertical layout inside a row.

use flexlayout_core::{
    handles, is_css_length, parse_gaps, parse_margins, parse_paddings, positioned, BlockSchema,
    DiagnosticCode, Element, Gaps, LayoutEnv, LayoutError, Node, ParentKind, RenderContext, Sides,
    SpacingError, SpacingStep, SpacingToken,
};
use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Props accepted by a column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ColProps {
    /// Extra block classes appended to the column handle
    pub block_class: Option<String>,
    /// Explicit CSS height of the column; a single length, blank means unset
    pub height: Option<String>,
    /// Left margin step
    pub margin_left: Option<SpacingToken>,
    /// Right margin step
    pub margin_right: Option<SpacingToken>,
    /// Left padding step
    pub padding_left: Option<SpacingToken>,
    /// Right padding step
    pub padding_right: Option<SpacingToken>,
    /// Column gap, inherited when absent
    pub col_gap: Option<SpacingToken>,
    /// Gap between rows of this column, inherited when absent
    pub row_gap: Option<SpacingToken>,
    /// Grow to fill free space in the row
    pub grow: bool,
    /// Size children to their content height instead of filling
    pub prevent_vertical_stretch: bool,
    /// Test ID
    pub test_id: Option<String>,
}

/// Spacing resolved for one render of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColLayout {
    /// Effective gaps
    pub gaps: Gaps,
    /// Margin classes
    pub margins: Vec<String>,
    /// Padding classes
    pub paddings: Vec<String>,
    /// Environment handed to the children
    pub child_env: LayoutEnv,
}

/// Column block: stacks its children vertically.
///
/// A column must sit inside a row. Outside of any row it renders nothing;
/// directly inside another column it still renders but reports a warning.
pub struct Col {
    /// Props
    props: ColProps,
    /// Children blocks
    children: Vec<Box<dyn Block>>,
    /// Instance identifier
    id: Option<String>,
}

impl Default for Col {
    fn default() -> Self {
        Self::new()
    }
}

impl Col {
    /// Block type name.
    pub const TYPE: &'static str = "flex-layout.col";

    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::from_props(ColProps::default())
    }

    /// Create a column from props.
    #[must_use]
    pub fn from_props(props: ColProps) -> Self {
        Self {
            props,
            children: Vec::new(),
            id: None,
        }
    }

    /// Editor schema.
    #[must_use]
    pub fn schema() -> BlockSchema {
        BlockSchema::editor("column")
    }

    /// Props.
    #[must_use]
    pub const fn props(&self) -> &ColProps {
        &self.props
    }

    /// Add a child block.
    #[must_use]
    pub fn child(mut self, block: impl Block + 'static) -> Self {
        self.children.push(Box::new(block));
        self
    }

    /// Add boxed child blocks.
    #[must_use]
    pub fn with_children(mut self, blocks: impl IntoIterator<Item = Box<dyn Block>>) -> Self {
        self.children.extend(blocks);
        self
    }

    /// Set the row gap.
    #[must_use]
    pub fn row_gap(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.row_gap = Some(token.into());
        self
    }

    /// Set the column gap.
    #[must_use]
    pub fn col_gap(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.col_gap = Some(token.into());
        self
    }

    /// Set the left margin.
    #[must_use]
    pub fn margin_left(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.margin_left = Some(token.into());
        self
    }

    /// Set the right margin.
    #[must_use]
    pub fn margin_right(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.margin_right = Some(token.into());
        self
    }

    /// Set the left padding.
    #[must_use]
    pub fn padding_left(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.padding_left = Some(token.into());
        self
    }

    /// Set the right padding.
    #[must_use]
    pub fn padding_right(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.padding_right = Some(token.into());
        self
    }

    /// Grow to fill free space.
    #[must_use]
    pub const fn grow(mut self, grow: bool) -> Self {
        self.props.grow = grow;
        self
    }

    /// Keep children at their content height.
    #[must_use]
    pub const fn prevent_vertical_stretch(mut self, prevent: bool) -> Self {
        self.props.prevent_vertical_stretch = prevent;
        self
    }

    /// Set block classes.
    #[must_use]
    pub fn block_class(mut self, class: impl Into<String>) -> Self {
        self.props.block_class = Some(class.into());
        self
    }

    /// Set an explicit CSS height.
    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.props.height = Some(height.into());
        self
    }

    /// Set the instance identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.props.test_id = Some(id.into());
        self
    }

    /// Resolve spacing against the environment the column is rendered in.
    ///
    /// Gaps fall back to the environment; margins and paddings come only
    /// from the props.
    pub fn resolve(&self, env: &LayoutEnv) -> Result<ColLayout, SpacingError> {
        let gaps = parse_gaps(self.props.col_gap.as_ref(), self.props.row_gap.as_ref(), env)?;
        let margins = parse_margins(&Sides {
            left: self.props.margin_left.clone(),
            right: self.props.margin_right.clone(),
            ..Sides::default()
        })?;
        let paddings = parse_paddings(&Sides {
            left: self.props.padding_left.clone(),
            right: self.props.padding_right.clone(),
            ..Sides::default()
        })?;

        Ok(ColLayout {
            gaps,
            margins,
            paddings,
            child_env: LayoutEnv::provide(ParentKind::Col, gaps),
        })
    }

    fn diagnostic_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.props.test_id.as_deref())
    }
}

impl Block for Col {
    fn block_type(&self) -> &'static str {
        Self::TYPE
    }

    fn render(
        &self,
        env: &LayoutEnv,
        cx: &mut RenderContext<'_>,
    ) -> Result<Option<Node>, LayoutError> {
        let layout = self.resolve(env)?;

        match env.parent() {
            ParentKind::Row => {}
            ParentKind::Col => {
                if cx.config().strict_nesting {
                    return Err(LayoutError::NestedCol {
                        block: self.diagnostic_id().map(str::to_string),
                    });
                }
                cx.warn(DiagnosticCode::ColInsideCol, self.diagnostic_id());
            }
            ParentKind::None => {
                cx.warn(DiagnosticCode::ColOutsideRow, self.diagnostic_id());
                return Ok(None);
            }
        }

        let height = match self.props.height.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) if is_css_length(value) => Some(value),
            Some(value) => {
                return Err(LayoutError::InvalidLength {
                    prop: "height".to_string(),
                    value: value.to_string(),
                });
            }
        };

        let css = &cx.config().css;
        let child_height = if self.props.prevent_vertical_stretch {
            "auto"
        } else {
            "100%"
        };

        let mut rows = Vec::with_capacity(self.children.len());
        for position in positioned(&self.children) {
            let row_gap = if position.is_last {
                SpacingStep::ZERO
            } else {
                layout.gaps.row_gap
            };
            let mut wrapper = Element::div()
                .with_class(&css.handle(handles::FLEX_COL_CHILD))
                .with_class(&row_gap.class("pb"))
                .with_style("height", child_height);
            if let Some(node) = position.item.render(&layout.child_env, cx)? {
                wrapper = wrapper.with_child(node);
            }
            rows.push(Node::from(wrapper));
        }

        let mut col = Element::div()
            .with_class(&css.block_class(handles::FLEX_COL, self.props.block_class.as_deref()))
            .with_class(if self.props.grow { "flex-grow-1" } else { "" })
            .with_classes(&layout.margins)
            .with_classes(&layout.paddings)
            .with_class("flex flex-column h-100 w-100");

        if let Some(height) = height {
            col = col.with_style("height", height);
        }
        if let Some(id) = &self.props.test_id {
            col = col.with_attr("data-testid", id);
        }

        tracing::debug!(
            block = self.diagnostic_id().unwrap_or(Self::TYPE),
            rows = rows.len(),
            row_gap = layout.gaps.row_gap.value(),
            "rendered column"
        );
        Ok(Some(col.with_children(rows).into()))
    }

    fn children(&self) -> &[Box<dyn Block>] {
        &self.children
    }

    fn block_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn test_id(&self) -> Option<&str> {
        self.props.test_id.as_deref()
    }
}
