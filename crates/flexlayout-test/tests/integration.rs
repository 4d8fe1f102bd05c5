//! Integration tests for flexlayout-test.

use flexlayout_blocks::{Col, Page, Row, Text};
use flexlayout_core::{DiagnosticCode, RenderConfig};
use flexlayout_test::{Harness, Selector};

fn page() -> Page {
    Page::new()
        .block(
            Row::new()
                .with_test_id("top")
                .col_gap(4)
                .child(Col::new().with_test_id("left").child(Text::new("L")))
                .child(Col::new().with_test_id("right").child(Text::new("R"))),
        )
        .block(Col::new().with_id("flex-layout.col#stray"))
}

#[test]
fn test_page_harness_queries() {
    let harness = Harness::page(&page(), RenderConfig::default()).unwrap();
    let row_child = harness.handle("flexRowChild");

    harness
        .assert_warning(DiagnosticCode::ColOutsideRow)
        .assert_count(&row_child, 2)
        .assert_count(&format!("{row_child}.pr4-ns"), 1)
        .assert_count(&format!("{row_child}.pr0-ns"), 1)
        .assert_exists(&format!("{} [data-testid='right']", harness.handle("container")))
        .assert_text("[data-testid='left']", "L")
        .assert_text("[data-testid='top']", "LR");

    assert_eq!(
        harness.diagnostics()[0].block.as_deref(),
        Some("flex-layout.col#stray")
    );
}

#[test]
fn test_selector_matches_rendered_element() {
    let harness = Harness::page(&page(), RenderConfig::default()).unwrap();
    let left = harness.query("[data-testid='left']").unwrap();
    assert!(Selector::parse("div.flex.flex-column").unwrap().matches(left));
    assert!(!Selector::parse("div.flex-ns").unwrap().matches(left));
}

#[test]
fn test_invalid_selector_matches_nothing() {
    let harness = Harness::page(&page(), RenderConfig::default()).unwrap();
    assert!(harness.query_all("div >").is_empty());
    harness.assert_not_exists("[data-testid=");
}
