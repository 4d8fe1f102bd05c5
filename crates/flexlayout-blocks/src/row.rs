//! Row block for horizontal layout.

use flexlayout_core::{
    handles, parse_gaps, parse_margins, parse_paddings, positioned, BlockSchema, DiagnosticCode,
    Element, Gaps, LayoutEnv, LayoutError, Node, ParentKind, RenderContext, Sides, SpacingError,
    SpacingStep, SpacingToken,
};
use serde::{Deserialize, Serialize};

use crate::block::Block;

/// How the columns of a row share its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColSizing {
    /// Columns split the width evenly
    #[default]
    Equal,
    /// Columns take their content width
    Auto,
}

/// Horizontal alignment of the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Pack columns at the left
    Left,
    /// Center columns
    Center,
    /// Pack columns at the right
    Right,
}

impl HorizontalAlign {
    const fn class(self) -> &'static str {
        match self {
            Self::Left => "justify-start",
            Self::Center => "justify-center",
            Self::Right => "justify-end",
        }
    }
}

/// Vertical alignment of the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Align to the top
    Top,
    /// Center vertically
    Middle,
    /// Align to the bottom
    Bottom,
}

impl VerticalAlign {
    const fn class(self) -> &'static str {
        match self {
            Self::Top => "items-start",
            Self::Middle => "items-center",
            Self::Bottom => "items-end",
        }
    }
}

/// Props accepted by a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RowProps {
    /// Extra block classes appended to the row handles
    pub block_class: Option<String>,
    /// Top margin step
    pub margin_top: Option<SpacingToken>,
    /// Bottom margin step
    pub margin_bottom: Option<SpacingToken>,
    /// Top padding step
    pub padding_top: Option<SpacingToken>,
    /// Bottom padding step
    pub padding_bottom: Option<SpacingToken>,
    /// Gap between columns, inherited when absent
    pub col_gap: Option<SpacingToken>,
    /// Gap between stacked columns on small screens, inherited when absent
    pub row_gap: Option<SpacingToken>,
    /// Column sizing
    pub col_sizing: ColSizing,
    /// Horizontal alignment
    pub horizontal_align: Option<HorizontalAlign>,
    /// Vertical alignment; columns stretch when absent
    pub vertical_align: Option<VerticalAlign>,
    /// Keep columns side by side on small screens
    pub preserve_layout_on_mobile: bool,
    /// Keep columns at their content width
    pub prevent_horizontal_stretch: bool,
    /// Keep columns at their content height
    pub prevent_vertical_stretch: bool,
    /// Skip the page-width container at the top level
    pub full_width: bool,
    /// Test ID
    pub test_id: Option<String>,
}

/// Spacing resolved for one render of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    /// Effective gaps
    pub gaps: Gaps,
    /// Margin classes
    pub margins: Vec<String>,
    /// Padding classes
    pub paddings: Vec<String>,
    /// Environment handed to the children
    pub child_env: LayoutEnv,
}

/// Row block: lays its children out side by side.
pub struct Row {
    /// Props
    props: RowProps,
    /// Children blocks
    children: Vec<Box<dyn Block>>,
    /// Instance identifier
    id: Option<String>,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Block type name.
    pub const TYPE: &'static str = "flex-layout.row";

    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::from_props(RowProps::default())
    }

    /// Create a row from props.
    #[must_use]
    pub fn from_props(props: RowProps) -> Self {
        Self {
            props,
            children: Vec::new(),
            id: None,
        }
    }

    /// Editor schema.
    #[must_use]
    pub fn schema() -> BlockSchema {
        BlockSchema::editor("row")
    }

    /// Props.
    #[must_use]
    pub const fn props(&self) -> &RowProps {
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

    /// Set the column gap.
    #[must_use]
    pub fn col_gap(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.col_gap = Some(token.into());
        self
    }

    /// Set the row gap.
    #[must_use]
    pub fn row_gap(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.row_gap = Some(token.into());
        self
    }

    /// Set the top margin.
    #[must_use]
    pub fn margin_top(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.margin_top = Some(token.into());
        self
    }

    /// Set the bottom margin.
    #[must_use]
    pub fn margin_bottom(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.margin_bottom = Some(token.into());
        self
    }

    /// Set the top padding.
    #[must_use]
    pub fn padding_top(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.padding_top = Some(token.into());
        self
    }

    /// Set the bottom padding.
    #[must_use]
    pub fn padding_bottom(mut self, token: impl Into<SpacingToken>) -> Self {
        self.props.padding_bottom = Some(token.into());
        self
    }

    /// Set column sizing.
    #[must_use]
    pub const fn col_sizing(mut self, sizing: ColSizing) -> Self {
        self.props.col_sizing = sizing;
        self
    }

    /// Set horizontal alignment.
    #[must_use]
    pub const fn horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.props.horizontal_align = Some(align);
        self
    }

    /// Set vertical alignment.
    #[must_use]
    pub const fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.props.vertical_align = Some(align);
        self
    }

    /// Keep columns side by side on small screens.
    #[must_use]
    pub const fn preserve_layout_on_mobile(mut self, preserve: bool) -> Self {
        self.props.preserve_layout_on_mobile = preserve;
        self
    }

    /// Keep columns at their content width.
    #[must_use]
    pub const fn prevent_horizontal_stretch(mut self, prevent: bool) -> Self {
        self.props.prevent_horizontal_stretch = prevent;
        self
    }

    /// Keep columns at their content height.
    #[must_use]
    pub const fn prevent_vertical_stretch(mut self, prevent: bool) -> Self {
        self.props.prevent_vertical_stretch = prevent;
        self
    }

    /// Skip the page-width container.
    #[must_use]
    pub const fn full_width(mut self, full: bool) -> Self {
        self.props.full_width = full;
        self
    }

    /// Set block classes.
    #[must_use]
    pub fn block_class(mut self, class: impl Into<String>) -> Self {
        self.props.block_class = Some(class.into());
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

    /// Resolve spacing against the environment the row is rendered in.
    pub fn resolve(&self, env: &LayoutEnv) -> Result<RowLayout, SpacingError> {
        let gaps = parse_gaps(self.props.col_gap.as_ref(), self.props.row_gap.as_ref(), env)?;
        let margins = parse_margins(&Sides {
            top: self.props.margin_top.clone(),
            bottom: self.props.margin_bottom.clone(),
            ..Sides::default()
        })?;
        let paddings = parse_paddings(&Sides {
            top: self.props.padding_top.clone(),
            bottom: self.props.padding_bottom.clone(),
            ..Sides::default()
        })?;

        Ok(RowLayout {
            gaps,
            margins,
            paddings,
            child_env: LayoutEnv::provide(ParentKind::Row, gaps),
        })
    }

    fn gap_classes(&self, gaps: Gaps, is_last: bool) -> [String; 3] {
        let (col_gap, row_gap) = if is_last {
            (SpacingStep::ZERO, SpacingStep::ZERO)
        } else {
            (gaps.col_gap, gaps.row_gap)
        };
        if self.props.preserve_layout_on_mobile {
            [col_gap.class("pr"), String::new(), String::new()]
        } else if is_last {
            [col_gap.class_ns("pr"), row_gap.class("pb"), String::new()]
        } else {
            [
                col_gap.class_ns("pr"),
                row_gap.class("pb"),
                SpacingStep::ZERO.class_ns("pb"),
            ]
        }
    }

    fn sizing_class(&self) -> &'static str {
        if self.props.prevent_horizontal_stretch {
            "flex-none"
        } else {
            match self.props.col_sizing {
                ColSizing::Equal => "flex-grow-1",
                ColSizing::Auto => "",
            }
        }
    }

    fn diagnostic_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.props.test_id.as_deref())
    }
}

impl Block for Row {
    fn block_type(&self) -> &'static str {
        Self::TYPE
    }

    fn render(
        &self,
        env: &LayoutEnv,
        cx: &mut RenderContext<'_>,
    ) -> Result<Option<Node>, LayoutError> {
        let layout = self.resolve(env)?;

        if env.parent() == ParentKind::Row {
            cx.warn(DiagnosticCode::RowInsideRow, self.diagnostic_id());
        }

        let css = &cx.config().css;
        let block_class = self.props.block_class.as_deref();
        let equal_basis = self.props.col_sizing == ColSizing::Equal
            && !self.props.prevent_horizontal_stretch;
        let child_height = if self.props.prevent_vertical_stretch {
            "auto"
        } else {
            "100%"
        };

        let mut cols = Vec::with_capacity(self.children.len());
        for position in positioned(&self.children) {
            let mut wrapper = Element::div()
                .with_class(&css.handle(handles::FLEX_ROW_CHILD))
                .with_class(self.sizing_class())
                .with_classes(self.gap_classes(layout.gaps, position.is_last))
                .with_style("height", child_height);
            if equal_basis {
                wrapper = wrapper.with_style("flex-basis", "0");
            }
            if let Some(node) = position.item.render(&layout.child_env, cx)? {
                wrapper = wrapper.with_child(node);
            }
            cols.push(Node::from(wrapper));
        }

        let content = Element::div()
            .with_class(&css.block_class(handles::FLEX_ROW_CONTENT, block_class))
            .with_class(if self.props.preserve_layout_on_mobile {
                "flex"
            } else {
                "flex-ns"
            })
            .with_class(self.props.horizontal_align.map_or("", HorizontalAlign::class))
            .with_class(
                self.props
                    .vertical_align
                    .map_or("items-stretch", VerticalAlign::class),
            )
            .with_class("w-100")
            .with_children(cols);

        let mut row = Element::div()
            .with_class(&css.block_class(handles::FLEX_ROW, block_class))
            .with_classes(&layout.margins)
            .with_classes(&layout.paddings);
        if let Some(id) = &self.props.test_id {
            row = row.with_attr("data-testid", id);
        }

        let row = if env.is_root() && !self.props.full_width {
            row.with_child(
                Element::div()
                    .with_class(&css.handle(handles::CONTAINER))
                    .with_class("w-100 mw9 center")
                    .with_child(content),
            )
        } else {
            row.with_child(content)
        };

        tracing::debug!(
            block = self.diagnostic_id().unwrap_or(Self::TYPE),
            cols = self.children.len(),
            col_gap = layout.gaps.col_gap.value(),
            "rendered row"
        );
        Ok(Some(row.into()))
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
