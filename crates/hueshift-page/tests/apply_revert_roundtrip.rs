#![forbid(unsafe_code)]

//! Apply/revert integration tests against an in-memory page.
//!
//! Validates:
//! - revert restores every inline declaration exactly, longhands included
//! - double apply followed by a single revert returns to the first apply
//! - elements removed between apply and revert are skipped
//! - hover affordances survive a revert
//! - every styled text color is black or white and reads against its backdrop

use hueshift_color::{Palette, PaletteConfig, Rgb, contrast_ratio, readable_text_color};
use hueshift_page::{
    ElementProvider, ElementRole, InteractionState, MemoryDocument, NodeId, StyleConfig,
    StyleProperty, apply_palette,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// ============================================================================
// Fixture
// ============================================================================

struct Page {
    doc: MemoryDocument,
    nodes: Vec<NodeId>,
    h1: NodeId,
    h3: NodeId,
    button: NodeId,
    submit: NodeId,
    link: NodeId,
    main: NodeId,
}

/// A small page with author inline styles on some elements.
fn page() -> Page {
    let mut doc = MemoryDocument::new();
    let body = doc.body_id();
    doc.set_computed_background(body, "rgb(255, 255, 255)");
    doc.set_inline_style(&body, StyleProperty::Transition, "opacity 1s");

    let header = doc.append(body, "header");
    let h1 = doc.append(header, "h1");
    doc.set_inline_style(&h1, StyleProperty::Color, "rebeccapurple");
    doc.set_inline_style(&h1, StyleProperty::Padding, "2px");

    let main = doc.append(body, "main");
    let h3 = doc.append(main, "h3");
    let button = doc.append(main, "button");
    doc.set_inline_style(&button, StyleProperty::Cursor, "default");
    let submit = doc.append_input(main, "submit");
    let text_input = doc.append_input(main, "text");
    let link = doc.append(main, "a");
    doc.set_inline_style(&link, StyleProperty::TextShadow, "none");
    let footer = doc.append(body, "footer");

    let nodes = vec![
        doc.html_id(),
        body,
        header,
        h1,
        main,
        h3,
        button,
        submit,
        text_input,
        link,
        footer,
    ];
    Page {
        doc,
        nodes,
        h1,
        h3,
        button,
        submit,
        link,
        main,
    }
}

fn inline_state(doc: &MemoryDocument, nodes: &[NodeId]) -> Vec<String> {
    nodes.iter().map(|id| doc.style_text(id)).collect()
}

fn palette(seed: u64) -> Palette {
    let mut rng = SmallRng::seed_from_u64(seed);
    Palette::generate(&mut rng, &PaletteConfig::default())
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn revert_restores_page_exactly() {
    let Page { mut doc, nodes, .. } = page();
    let before = inline_state(&doc, &nodes);

    let session = apply_palette(&mut doc, palette(7), &StyleConfig::default());
    assert_ne!(inline_state(&doc, &nodes), before);

    let report = session.revert(&mut doc);
    assert_eq!(inline_state(&doc, &nodes), before);
    assert_eq!(report.skipped_stale, 0);
    // body, h1, h3, button, submit, link, header, main, footer
    assert_eq!(report.restored_elements, 9);
}

#[test]
fn author_longhands_survive_revert() {
    let mut doc = MemoryDocument::new();
    let body = doc.body_id();
    let h1 = doc.append(body, "h1");
    doc.set_declaration(h1, "padding-left", "4px");
    doc.set_declaration(h1, "background-image", "url(a.png)");
    doc.set_declaration(h1, "border-top-left-radius", "3px");
    let button = doc.append(body, "button");
    doc.set_declaration(button, "transition-duration", "2s");
    let nodes = [body, h1, button];
    let before = inline_state(&doc, &nodes);

    let session = apply_palette(&mut doc, palette(12), &StyleConfig::default());
    assert_eq!(doc.declaration(h1, "padding-left"), "");
    assert_eq!(doc.declaration(h1, "background-image"), "");
    assert_eq!(doc.declaration(button, "transition-duration"), "");

    session.revert(&mut doc);
    assert_eq!(inline_state(&doc, &nodes), before);
    assert_eq!(doc.declaration(h1, "padding-left"), "4px");
    assert_eq!(doc.declaration(h1, "background-image"), "url(a.png)");
    assert_eq!(doc.declaration(h1, "border-top-left-radius"), "3px");
    assert_eq!(doc.declaration(button, "transition-duration"), "2s");
    assert_eq!(doc.inline(h1, StyleProperty::Padding), "");
}

#[test]
fn revert_after_double_apply_returns_to_first_apply() {
    let Page { mut doc, nodes, .. } = page();
    let config = StyleConfig::default();
    let original = inline_state(&doc, &nodes);

    let first = apply_palette(&mut doc, palette(1), &config);
    let after_first = inline_state(&doc, &nodes);
    let second = apply_palette(&mut doc, palette(2), &config);

    second.revert(&mut doc);
    assert_eq!(inline_state(&doc, &nodes), after_first);

    first.revert(&mut doc);
    assert_eq!(inline_state(&doc, &nodes), original);
}

#[test]
fn apply_without_revert_overwrites_styles() {
    let Page {
        mut doc, main, h3, ..
    } = page();
    let config = StyleConfig::default();

    apply_palette(&mut doc, palette(3), &config);
    let second = palette(4);
    apply_palette(&mut doc, second, &config);

    assert_eq!(
        doc.inline(h3, StyleProperty::BackgroundColor),
        second.secondary.to_hex()
    );
    assert_eq!(
        doc.inline(main, StyleProperty::BackgroundColor),
        format!("{}44", second.secondary.to_hex())
    );
}

#[test]
fn detached_elements_are_skipped_on_revert() {
    let Page {
        mut doc, main, h1, ..
    } = page();
    let session = apply_palette(&mut doc, palette(5), &StyleConfig::default());
    let styled_main = doc.style_text(&main);
    doc.detach(main);

    let report = session.revert(&mut doc);
    // main, h3, button, submit, link
    assert_eq!(report.skipped_stale, 5);
    assert_eq!(doc.style_text(&main), styled_main);
    assert_eq!(doc.inline(h1, StyleProperty::Color), "rebeccapurple");
    assert_eq!(doc.inline(h1, StyleProperty::Padding), "2px");
}

#[test]
fn hover_cycle_then_revert_is_exact() {
    let Page {
        mut doc,
        nodes,
        button,
        ..
    } = page();
    let before = inline_state(&doc, &nodes);
    let session = apply_palette(&mut doc, palette(6), &StyleConfig::default());

    assert!(doc.hover(button, InteractionState::Hovered));
    assert_eq!(doc.inline(button, StyleProperty::Transform), "translateY(-2px)");
    assert!(doc.hover(button, InteractionState::Normal));

    session.revert(&mut doc);
    assert_eq!(inline_state(&doc, &nodes), before);
    // Listeners stay installed after a revert.
    assert!(doc.has_hover(button));
}

#[test]
fn revert_mid_hover_clears_transform() {
    let Page {
        mut doc, submit, ..
    } = page();
    let session = apply_palette(&mut doc, palette(8), &StyleConfig::default());
    doc.hover(submit, InteractionState::Hovered);
    session.revert(&mut doc);
    assert_eq!(doc.inline(submit, StyleProperty::Transform), "");
    assert_eq!(doc.inline(submit, StyleProperty::BoxShadow), "");
}

#[test]
fn unstyled_roles_are_untouched() {
    let mut doc = MemoryDocument::new();
    let p = doc.append(doc.body_id(), "p");
    let div = doc.append(doc.body_id(), "div");
    let text = doc.append_input(doc.body_id(), "text");
    apply_palette(&mut doc, palette(9), &StyleConfig::default());
    for id in [p, div, text] {
        assert!(doc.style_text(&id).is_empty(), "{id:?}");
    }
}

#[test]
fn session_records_roles() {
    let Page { mut doc, .. } = page();
    let session = apply_palette(&mut doc, palette(10), &StyleConfig::default());
    assert_eq!(session.count(ElementRole::Body), 1);
    assert_eq!(session.count(ElementRole::Heading), 2);
    assert_eq!(session.count(ElementRole::Button), 2);
    assert_eq!(session.count(ElementRole::Link), 1);
    assert_eq!(session.count(ElementRole::Container), 3);
    assert_eq!(session.palette(), &palette(10));
}

// ============================================================================
// Readability
// ============================================================================

fn parse_hex(value: &str) -> Rgb {
    Rgb::from_hex(value).unwrap_or_else(|| panic!("not a hex color: {value:?}"))
}

proptest! {
    #[test]
    fn text_colors_are_black_or_white_and_best(seed in any::<u64>()) {
        let Page { mut doc, h1, h3, button, link, main, .. } = page();
        let palette = palette(seed);
        apply_palette(&mut doc, palette, &StyleConfig::default());

        for id in [h1, h3, button, link, main] {
            let text = parse_hex(doc.inline(id, StyleProperty::Color));
            prop_assert!(text == Rgb::BLACK || text == Rgb::WHITE);
        }

        let on_secondary = parse_hex(doc.inline(h3, StyleProperty::Color));
        let other = if on_secondary == Rgb::BLACK { Rgb::WHITE } else { Rgb::BLACK };
        prop_assert!(
            contrast_ratio(on_secondary, palette.secondary)
                >= contrast_ratio(other, palette.secondary)
        );

        let on_primary = parse_hex(doc.inline(button, StyleProperty::Color));
        prop_assert_eq!(on_primary, readable_text_color(palette.primary));
    }

    #[test]
    fn revert_is_exact_for_any_palette(seed in any::<u64>(), applies in 1usize..4) {
        let Page { mut doc, nodes, .. } = page();
        let before = inline_state(&doc, &nodes);
        let config = StyleConfig::default();

        let mut sessions = Vec::new();
        for i in 0..applies {
            sessions.push(apply_palette(&mut doc, palette(seed.wrapping_add(i as u64)), &config));
        }
        while let Some(session) = sessions.pop() {
            session.revert(&mut doc);
        }
        prop_assert_eq!(inline_state(&doc, &nodes), before);
    }
}
