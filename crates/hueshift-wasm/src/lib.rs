#![forbid(unsafe_code)]

//! Browser entry point for hueshift.
//!
//! [`install`] injects two fixed-position controls into `<body>`: `🎨`
//! applies a fresh random palette, `⏪` reverts the last one. It returns a
//! [`HueShift`] handle so pages can drive the same state from script.
//!
//! The click handling lives in a platform-independent controller so native
//! tests can exercise it against `hueshift_page::MemoryDocument`.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{HueShift, install};

pub mod controls;

// Controller is used by the wasm module and by native tests.
#[cfg(any(target_arch = "wasm32", test))]
mod controller;

#[cfg(test)]
mod tests {
    use crate::controller::{ControlOutcome, Controller};
    use crate::controls::ControlAction;
    use hueshift_page::{
        ElementProvider, MemoryDocument, NodeId, StyleConfig, StyleProperty,
        interactive::InteractionState,
    };
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn page() -> (MemoryDocument, NodeId, NodeId) {
        let mut doc = MemoryDocument::new();
        let body = doc.body_id();
        let heading = doc.append(body, "h2");
        doc.set_inline_style(&heading, StyleProperty::Color, "navy");
        let button = doc.append(body, "button");
        (doc, heading, button)
    }

    #[test]
    fn controller_starts_idle() {
        let controller: Controller<NodeId> = Controller::new(StyleConfig::default(), 1);
        assert!(!controller.has_session());
        assert_eq!(controller.current_palette(), None);
        assert_eq!(controller.applies(), 0);
    }

    #[test]
    fn apply_then_revert_restores_page() {
        let (mut doc, heading, button) = page();
        let mut controller = Controller::new(StyleConfig::default(), 42);

        let palette = controller.on_apply(&mut doc);
        assert_eq!(controller.current_palette(), Some(palette));
        assert_eq!(
            doc.inline(button, StyleProperty::BackgroundColor),
            palette.primary.to_hex()
        );

        let report = controller.on_revert(&mut doc).expect("session to revert");
        assert_eq!(report.skipped_stale, 0);
        assert_eq!(doc.inline(heading, StyleProperty::Color), "navy");
        assert!(doc.style_text(&button).is_empty());
        assert!(!controller.has_session());
    }

    #[test]
    fn same_seed_gives_same_palettes() {
        let (mut a, _, _) = page();
        let (mut b, _, _) = page();
        let mut first = Controller::new(StyleConfig::default(), 7);
        let mut second = Controller::new(StyleConfig::default(), 7);
        for _ in 0..5 {
            assert_eq!(first.on_apply(&mut a), second.on_apply(&mut b));
        }
        assert_eq!(first.applies(), 5);
    }

    #[test]
    #[traced_test]
    fn second_apply_replaces_session() {
        let (mut doc, heading, _) = page();
        let mut controller = Controller::new(StyleConfig::default(), 3);
        controller.on_apply(&mut doc);
        let after_first = doc.inline(heading, StyleProperty::Color).to_string();
        let second = controller.on_apply(&mut doc);
        assert_eq!(controller.current_palette(), Some(second));
        assert!(logs_contain("replacing previous style session"));

        controller.on_revert(&mut doc);
        // Only the latest apply is undone.
        assert_eq!(doc.inline(heading, StyleProperty::Color), after_first);
        assert!(controller.on_revert(&mut doc).is_none());
    }

    #[test]
    #[traced_test]
    fn revert_without_apply_is_noop() {
        let (mut doc, heading, _) = page();
        let mut controller: Controller<NodeId> = Controller::new(StyleConfig::default(), 0);
        assert_eq!(
            controller.dispatch(ControlAction::Revert, &mut doc),
            ControlOutcome::NothingToRevert
        );
        assert_eq!(doc.inline(heading, StyleProperty::Color), "navy");
        assert!(logs_contain("no active session"));
    }

    #[test]
    fn dispatch_routes_actions() {
        let (mut doc, _, button) = page();
        let mut controller = Controller::new(StyleConfig::default(), 11);

        let ControlOutcome::Applied(palette) = controller.dispatch(ControlAction::Apply, &mut doc)
        else {
            panic!("apply should report a palette");
        };
        assert!(doc.has_hover(button));
        doc.hover(button, InteractionState::Hovered);
        assert_eq!(
            doc.inline(button, StyleProperty::BoxShadow),
            format!("1px 1px 3px {}", palette.accent.to_hex())
        );

        match controller.dispatch(ControlAction::Revert, &mut doc) {
            ControlOutcome::Reverted(report) => assert_eq!(report.restored_elements, 3),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(doc.style_text(&button).is_empty());
    }

    #[test]
    fn custom_config_flows_through() {
        let (mut doc, _, _) = page();
        let mut config = StyleConfig::default();
        config.body_transition = "none".into();
        let mut controller = Controller::new(config, 5);
        assert_eq!(controller.config().body_transition, "none");
        controller.on_apply(&mut doc);
        assert_eq!(
            doc.inline(doc.body_id(), StyleProperty::Transition),
            "none"
        );
    }
}
