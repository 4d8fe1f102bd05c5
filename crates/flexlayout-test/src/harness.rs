//! Test harness for rendered flex-layout blocks.

use flexlayout_blocks::{render_in, Block, Page, Rendered};
use flexlayout_core::{
    Diagnostic, DiagnosticCode, Element, LayoutEnv, LayoutError, Node, RenderConfig,
};

use crate::selector::Selector;

/// Test harness holding the result of one render pass.
#[derive(Debug, Clone)]
pub struct Harness {
    /// Render output
    rendered: Rendered,
    /// Config used for the pass
    config: RenderConfig,
}

impl Harness {
    /// Render a block at the root of a page with the default config.
    ///
    /// # Panics
    ///
    /// Panics if rendering fails.
    pub fn new(block: impl Block + 'static) -> Self {
        let config = RenderConfig::default();
        Self::render_with(&block, &LayoutEnv::root(), config)
            .unwrap_or_else(|e| panic!("Expected block to render but got: {e}"))
    }

    /// Render a block in a given environment and config.
    ///
    /// # Errors
    ///
    /// Returns the render error, if any.
    pub fn render_with(
        block: &dyn Block,
        env: &LayoutEnv,
        config: RenderConfig,
    ) -> Result<Self, LayoutError> {
        let rendered = render_in(block, env, &config)?;
        Ok(Self { rendered, config })
    }

    /// Render a whole page.
    ///
    /// # Errors
    ///
    /// Returns the render error, if any.
    pub fn page(page: &Page, config: RenderConfig) -> Result<Self, LayoutError> {
        let rendered = page.render(&config)?;
        Ok(Self { rendered, config })
    }

    /// Render output.
    pub const fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    /// Rendered HTML.
    pub fn html(&self) -> String {
        self.rendered.to_html()
    }

    /// Class selector for a namespaced CSS handle, e.g. `flexCol`.
    pub fn handle(&self, name: &str) -> String {
        format!(".{}", self.config.css.handle(name))
    }

    // === Queries ===

    /// Query for the first element matching the selector, in document order.
    pub fn query(&self, selector: &str) -> Option<&Element> {
        self.query_all(selector).into_iter().next()
    }

    /// Query for all elements matching the selector, in document order.
    pub fn query_all(&self, selector: &str) -> Vec<&Element> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        let mut path = Vec::new();
        for node in &self.rendered.nodes {
            find_all(node, &sel, &mut path, &mut results);
        }
        results
    }

    /// Text content of the first matching element.
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .map(|el| el.children().iter().map(Node::text_content).collect())
            .unwrap_or_default()
    }

    /// Check if an element exists.
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Warnings raised during the render pass.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.rendered.diagnostics
    }

    // === Assertions ===

    /// Assert that an element exists.
    ///
    /// # Panics
    ///
    /// Panics if no element matches.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected element matching '{selector}' to exist"
        );
        self
    }

    /// Assert that no element matches.
    ///
    /// # Panics
    ///
    /// Panics if an element matches.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected element matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the count of matching elements.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} elements matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert an inline style of the first matching element.
    ///
    /// # Panics
    ///
    /// Panics if no element matches or the style differs.
    pub fn assert_style(&self, selector: &str, property: &str, expected: &str) -> &Self {
        let Some(el) = self.query(selector) else {
            panic!("Expected element matching '{selector}' to exist");
        };
        assert_eq!(
            el.style(property),
            Some(expected),
            "Expected style '{property}: {expected}' for '{selector}'"
        );
        self
    }

    /// Assert that nothing was rendered.
    ///
    /// # Panics
    ///
    /// Panics if any node was rendered.
    pub fn assert_empty(&self) -> &Self {
        assert!(
            self.rendered.is_empty(),
            "Expected empty output but got '{}'",
            self.html()
        );
        self
    }

    /// Assert that exactly one warning with the given code was raised.
    ///
    /// # Panics
    ///
    /// Panics if the count of warnings with `code` is not one.
    pub fn assert_warning(&self, code: DiagnosticCode) -> &Self {
        let count = self.diagnostics().iter().filter(|d| d.code == code).count();
        assert_eq!(
            count,
            1,
            "Expected one '{}' warning but found {count}",
            code.as_str()
        );
        self
    }

    /// Assert that no warning was raised.
    ///
    /// # Panics
    ///
    /// Panics if any warning was raised.
    pub fn assert_no_warnings(&self) -> &Self {
        assert!(
            self.diagnostics().is_empty(),
            "Expected no warnings but got {:?}",
            self.diagnostics()
        );
        self
    }
}

fn find_all<'a>(
    node: &'a Node,
    selector: &Selector,
    path: &mut Vec<&'a Element>,
    results: &mut Vec<&'a Element>,
) {
    let Some(el) = node.as_element() else {
        return;
    };
    path.push(el);
    if selector.matches_path(path) {
        results.push(el);
    }
    for child in el.children() {
        find_all(child, selector, path, results);
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexlayout_blocks::{Col, Row, Text};
    use flexlayout_core::{Gaps, ParentKind};

    fn sample() -> Row {
        Row::new().with_test_id("row").child(
            Col::new()
                .row_gap(3)
                .with_test_id("col")
                .child(Text::new("one").with_test_id("first"))
                .child(Text::new("two")),
        )
    }

    #[test]
    fn test_harness_exists() {
        let harness = Harness::new(sample());
        assert!(harness.exists("[data-testid='col']"));
        assert!(!harness.exists("[data-testid='nonexistent']"));
        assert!(!harness.exists("!!"));
    }

    #[test]
    #[should_panic(expected = "Expected element matching")]
    fn test_harness_assert_exists_fails() {
        Harness::new(sample()).assert_exists("[data-testid='missing']");
    }

    #[test]
    fn test_harness_text() {
        let harness = Harness::new(sample());
        harness
            .assert_text("[data-testid='first']", "one")
            .assert_text("[data-testid='col']", "onetwo")
            .assert_text("[data-testid='missing']", "");
    }

    #[test]
    fn test_harness_query_order() {
        let harness = Harness::new(sample());
        let wrappers = harness.query_all(&harness.handle("flexColChild"));
        assert_eq!(wrappers.len(), 2);
        assert!(wrappers[0].has_class("pb3"));
        assert!(wrappers[1].has_class("pb0"));
    }

    #[test]
    fn test_harness_combinators() {
        let harness = Harness::new(sample());
        let col = harness.handle("flexCol");
        let child = harness.handle("flexColChild");
        harness
            .assert_count(&format!("{col} > {child}"), 2)
            .assert_count(&format!("[data-testid='row'] {child}"), 2)
            .assert_count(&format!("[data-testid='row'] > {child}"), 0);
    }

    #[test]
    fn test_harness_style() {
        let harness = Harness::new(sample());
        let child = harness.handle("flexColChild");
        harness.assert_style(&child, "height", "100%");
    }

    #[test]
    fn test_harness_warning() {
        let harness = Harness::new(Col::new().child(Text::new("x")));
        harness
            .assert_empty()
            .assert_warning(DiagnosticCode::ColOutsideRow);
    }

    #[test]
    fn test_harness_render_with_env() {
        let env = LayoutEnv::provide(ParentKind::Col, Gaps::NONE);
        let harness =
            Harness::render_with(&Col::new(), &env, RenderConfig::default()).unwrap();
        harness
            .assert_warning(DiagnosticCode::ColInsideCol)
            .assert_count(&harness.handle("flexCol"), 1);

        let strict = RenderConfig::default().with_strict_nesting(true);
        assert!(Harness::render_with(&Col::new(), &env, strict).is_err());
    }
}
