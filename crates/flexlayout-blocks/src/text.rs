//! Text block for leaf content.

use flexlayout_core::{handles, Element, LayoutEnv, LayoutError, Node, RenderContext};
use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Props accepted by a text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TextProps {
    /// Text content
    pub text: String,
    /// Extra block classes
    pub block_class: Option<String>,
    /// Test ID
    pub test_id: Option<String>,
}

/// Text block: renders escaped text. Ignores the layout environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Props
    props: TextProps,
    /// Instance identifier
    id: Option<String>,
}

impl Text {
    /// Block type name.
    pub const TYPE: &'static str = "rich-text";

    /// Create a text block.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_props(TextProps {
            text: text.into(),
            ..TextProps::default()
        })
    }

    /// Create a text block from props.
    #[must_use]
    pub const fn from_props(props: TextProps) -> Self {
        Self { props, id: None }
    }

    /// Text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.props.text
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
}

impl Block for Text {
    fn block_type(&self) -> &'static str {
        Self::TYPE
    }

    fn render(
        &self,
        _env: &LayoutEnv,
        cx: &mut RenderContext<'_>,
    ) -> Result<Option<Node>, LayoutError> {
        let css = &cx.config().css;
        let mut el = Element::div()
            .with_class(&css.block_class(handles::RICH_TEXT, self.props.block_class.as_deref()))
            .with_child(Node::text(self.props.text.as_str()));
        if let Some(id) = &self.props.test_id {
            el = el.with_attr("data-testid", id);
        }
        Ok(Some(el.into()))
    }

    fn block_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn test_id(&self) -> Option<&str> {
        self.props.test_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlayout_core::RenderConfig;

    #[test]
    fn test_text_renders_escaped() {
        let config = RenderConfig::default();
        let mut cx = RenderContext::new(&config);
        let node = Text::new("<b>")
            .with_test_id("t")
            .render(&LayoutEnv::root(), &mut cx)
            .unwrap()
            .unwrap();
        assert_eq!(
            node.to_html(),
            r#"<div class="vtex-flex-layout-0-x-richText" data-testid="t">&lt;b&gt;</div>"#
        );
        assert!(cx.diagnostics().is_empty());
    }

    #[test]
    fn test_text_accessors() {
        let text = Text::new("hello").with_id("rich-text#hello");
        assert_eq!(text.text(), "hello");
        assert_eq!(text.block_id(), Some("rich-text#hello"));
        assert!(text.children().is_empty());
    }
}
