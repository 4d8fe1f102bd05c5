//! Integration tests for flexlayout-core.
//!
//! These tests exercise the public API the way the layout blocks use it.

use flexlayout_core::{
    parse_gaps, parse_margins, parse_paddings, CssNamespace, Element, Gaps, LayoutEnv,
    MessageCatalog, Node, ParentKind, RenderConfig, Sides, SpacingStep, SpacingToken,
};

// =============================================================================
// Spacing Resolution Through Nested Environments
// =============================================================================

#[test]
fn test_gaps_flow_through_nested_containers() {
    // A row publishes its own gaps...
    let row_gaps = parse_gaps(
        Some(&SpacingToken::from(4)),
        Some(&SpacingToken::from("6")),
        &LayoutEnv::root(),
    )
    .expect("valid gaps");
    let row_env = LayoutEnv::provide(ParentKind::Row, row_gaps);

    // ...a column overriding only the row gap keeps the inherited column gap...
    let col_gaps = parse_gaps(None, Some(&SpacingToken::from(2)), &row_env).expect("valid gaps");
    assert_eq!(col_gaps.col_gap.value(), 4);
    assert_eq!(col_gaps.row_gap.value(), 2);
    let col_env = LayoutEnv::provide(ParentKind::Col, col_gaps);

    // ...and a grandchild with no overrides sees the column's values.
    let inner = parse_gaps(None, None, &col_env).expect("valid gaps");
    assert_eq!(inner, col_gaps);

    // The row's environment is unchanged by what its children did.
    assert_eq!(row_env.gaps(), row_gaps);
}

#[test]
fn test_root_gaps_are_zero() {
    let gaps = parse_gaps(None, None, &LayoutEnv::root()).expect("valid gaps");
    assert_eq!(gaps, Gaps::NONE);
}

#[test]
fn test_margin_and_padding_classes_compose_on_element() {
    let margins = parse_margins(&Sides::new().left(2).right(2)).expect("valid margins");
    let paddings = parse_paddings(&Sides::new().left(1)).expect("valid paddings");

    let el = Element::div()
        .with_classes(&margins)
        .with_classes(&paddings)
        .with_class("flex flex-column");
    assert_eq!(el.class_attr(), "mr2 ml2 pl1 flex flex-column");
}

#[test]
fn test_invalid_token_is_reported_not_passed_through() {
    let err = parse_margins(&Sides::new().left("auto")).expect_err("auto is not a step");
    assert!(err.to_string().contains("marginLeft"));
}

// =============================================================================
// Configuration, Handles and Messages
// =============================================================================

#[test]
fn test_config_namespace_drives_handles() {
    let config = RenderConfig::from_toml("[css]\nvendor = \"shop\"\napp = \"layout\"\nmajor = 2\n")
        .expect("valid config");
    assert_eq!(config.css, CssNamespace::new("shop", "layout", 2));
    assert_eq!(
        config.css.block_class("flexCol", Some("main")),
        "shop-layout-2-x-flexCol shop-layout-2-x-flexCol--main"
    );
}

#[test]
fn test_catalog_from_json() {
    let mut catalog = MessageCatalog::new();
    catalog
        .insert_json(
            "en",
            r#"{"admin/editor.column.title": "Column", "admin/editor.column.description": "Stacks blocks vertically"}"#,
        )
        .expect("valid json");

    let schema = flexlayout_core::BlockSchema::editor("column");
    let localized = catalog.localize("en-GB", &schema);
    assert_eq!(localized.title, "Column");
    assert_eq!(localized.description, "Stacks blocks vertically");
}

#[test]
fn test_step_px_matches_scale() {
    let px: Vec<f32> = (0..=11)
        .map(|n| SpacingStep::new(n).expect("on scale").px())
        .collect();
    assert_eq!(
        px,
        [0.0, 2.0, 4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0, 128.0, 256.0]
    );
}

#[test]
fn test_element_json_round_trip_keeps_order() {
    let node: Node = Element::div()
        .with_class("a b")
        .with_style("height", "auto")
        .with_child(Node::text("x"))
        .into();
    let json = serde_json::to_string(&node).expect("serialize");
    let back: Node = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.to_html(), node.to_html());
}
