//! Framework-neutral element tree produced by rendering blocks.
//!
//! An [`Element`] carries a tag, utility classes, inline style declarations,
//! attributes and children. Trees serialize to JSON through `serde` and to
//! markup through [`Node::to_html`].
//!
//! # Examples
//!
//! ```
//! use flexlayout_core::{Element, Node};
//!
//! let node: Node = Element::div()
//!     .with_class("flex flex-column")
//!     .with_style("height", "100%")
//!     .with_child(Node::text("A & B"))
//!     .into();
//!
//! assert_eq!(
//!     node.to_html(),
//!     r#"<div class="flex flex-column" style="height: 100%">A &amp; B</div>"#
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A node in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Element with children
    Element(Element),
    /// Text content
    Text {
        /// Unescaped text
        text: String,
    },
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Element behind this node, if any.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text { .. } => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(text),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Render this node as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::Text { text } => out.push_str(&escape_html(text)),
            Self::Element(el) => el.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    style: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attrs: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create a `div`.
    #[must_use]
    pub fn div() -> Self {
        Self::new("div")
    }

    /// Append classes. Whitespace-separated entries are split; blanks are skipped.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    /// Append several classes.
    #[must_use]
    pub fn with_classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        classes
            .into_iter()
            .fold(self, |el, class| el.with_class(class.as_ref()))
    }

    /// Set an inline style declaration, replacing an earlier one for `property`.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        set_pair(&mut self.style, property.into(), value.into());
        self
    }

    /// Set an attribute, replacing an earlier value.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_pair(&mut self.attrs, name.into(), value.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check if the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Value of an inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        get_pair(&self.style, property)
    }

    /// Value of an attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        get_pair(&self.attrs, name)
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child nodes that are elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Value of the `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Value of the `style` attribute.
    #[must_use]
    pub fn style_attr(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Render this element as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&self.class_attr()));
        }
        if !self.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape_html(&self.style_attr()));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    if let Some(slot) = pairs.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        pairs.push((key, value));
    }
}

fn get_pair<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Escape text for use in HTML content and quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
