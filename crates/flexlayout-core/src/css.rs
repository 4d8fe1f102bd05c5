//! CSS handle naming and block-class generation.

use serde::{Deserialize, Serialize};

/// Handle names exposed by the layout blocks.
pub mod handles {
    /// Outer container of a column
    pub const FLEX_COL: &str = "flexCol";
    /// Wrapper around each child of a column
    pub const FLEX_COL_CHILD: &str = "flexColChild";
    /// Outer container of a row
    pub const FLEX_ROW: &str = "flexRow";
    /// Flex container holding the columns of a row
    pub const FLEX_ROW_CONTENT: &str = "flexRowContent";
    /// Wrapper around each child of a row
    pub const FLEX_ROW_CHILD: &str = "flexRowChild";
    /// Page-width container around a top-level row
    pub const CONTAINER: &str = "container";
    /// Text leaf
    pub const RICH_TEXT: &str = "richText";
}

/// Combine a base class with per-instance block classes.
///
/// Returns `base` unchanged when `block_class` is absent or blank, otherwise
/// `base` followed by `base--<entry>` for each whitespace-separated entry.
///
/// ```
/// use flexlayout_core::generate_block_class;
///
/// assert_eq!(generate_block_class("flexCol", None), "flexCol");
/// assert_eq!(
///     generate_block_class("flexCol", Some("sidebar dark")),
///     "flexCol flexCol--sidebar flexCol--dark"
/// );
/// ```
#[must_use]
pub fn generate_block_class(base: &str, block_class: Option<&str>) -> String {
    let mut out = base.to_string();
    for entry in block_class.unwrap_or_default().split_whitespace() {
        out.push(' ');
        out.push_str(base);
        out.push_str("--");
        out.push_str(entry);
    }
    out
}

const LENGTH_UNITS: [&str; 15] = [
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex", "pt", "pc", "cm", "mm", "in",
];

/// Check that a value is a single non-negative CSS length: `auto`, `0`, or
/// a number followed by a unit (`240px`, `1.5rem`, `50%`).
#[must_use]
pub fn is_css_length(value: &str) -> bool {
    if value == "auto" || value == "0" {
        return true;
    }
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let valid_number = !number.is_empty()
        && number.matches('.').count() <= 1
        && number.bytes().any(|b| b.is_ascii_digit());
    valid_number && LENGTH_UNITS.contains(&unit)
}

/// Namespace used to turn handle names into scoped CSS classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssNamespace {
    /// Vendor prefix
    pub vendor: String,
    /// App name
    pub app: String,
    /// App major version
    pub major: u32,
}

impl Default for CssNamespace {
    fn default() -> Self {
        Self {
            vendor: "vtex".to_string(),
            app: "flex-layout".to_string(),
            major: 0,
        }
    }
}

impl CssNamespace {
    /// Create a namespace.
    #[must_use]
    pub fn new(vendor: impl Into<String>, app: impl Into<String>, major: u32) -> Self {
        Self {
            vendor: vendor.into(),
            app: app.into(),
            major,
        }
    }

    /// Scoped class name for a handle, e.g. `vtex-flex-layout-0-x-flexCol`.
    #[must_use]
    pub fn handle(&self, name: &str) -> String {
        format!("{}-{}-{}-x-{name}", self.vendor, self.app, self.major)
    }

    /// Scoped handle combined with block classes.
    #[must_use]
    pub fn block_class(&self, handle: &str, block_class: Option<&str>) -> String {
        generate_block_class(&self.handle(handle), block_class)
    }
}
