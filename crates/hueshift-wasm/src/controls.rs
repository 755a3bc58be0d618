#![forbid(unsafe_code)]

//! The two fixed-position buttons injected into the page.

/// Attribute set on injected controls so styling passes skip them.
pub const CONTROL_ATTRIBUTE: &str = "data-hueshift-control";

/// What a control does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    Apply,
    Revert,
}

impl ControlAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Revert => "revert",
        }
    }
}

/// Static description of one injected control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlButton {
    pub action: ControlAction,
    /// Button text.
    pub text: &'static str,
    /// Tooltip.
    pub title: &'static str,
    /// Inline `(css-property, value)` pairs.
    pub declarations: &'static [(&'static str, &'static str)],
}

pub const APPLY_CONTROL: ControlButton = ControlButton {
    action: ControlAction::Apply,
    text: "\u{1F3A8}",
    title: "Randomize colors",
    declarations: &[
        ("position", "fixed"),
        ("top", "10px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("z-index", "9999"),
    ],
};

pub const REVERT_CONTROL: ControlButton = ControlButton {
    action: ControlAction::Revert,
    text: "\u{23EA}",
    title: "Revert colors",
    declarations: &[
        ("position", "fixed"),
        ("top", "10px"),
        ("left", "calc(50% + 30px)"),
        ("z-index", "9999"),
    ],
};

/// Controls in insertion order.
pub const CONTROLS: [ControlButton; 2] = [APPLY_CONTROL, REVERT_CONTROL];

impl ControlButton {
    /// Value of `property` in this control's declarations.
    #[must_use]
    pub fn declaration(&self, property: &str) -> Option<&'static str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }
}
