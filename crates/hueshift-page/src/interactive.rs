#![forbid(unsafe_code)]

//! Hover affordances as data.
//!
//! [`InteractiveStyle`] holds the inline declarations for the resting state
//! and an optional hover overlay. Resolving a state patches the overlay on
//! top of the resting declarations, so the hovered state only needs to name
//! what changes.
//!
//! # Example
//!
//! ```
//! use hueshift_page::StyleProperty;
//! use hueshift_page::interactive::{InteractionState, InteractiveStyle};
//!
//! let style = InteractiveStyle::new(vec![
//!     (StyleProperty::BoxShadow, "3px 3px 5px #AA0000".into()),
//!     (StyleProperty::Transform, "translateY(0)".into()),
//! ])
//! .hover(vec![(StyleProperty::Transform, "translateY(-2px)".into())]);
//!
//! let hovered = style.resolve(InteractionState::Hovered);
//! assert_eq!(hovered.len(), 2);
//! ```

use crate::element::StyleProperty;

/// Ordered inline declarations.
pub type Declarations = Vec<(StyleProperty, String)>;

/// Pointer state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// Pointer is elsewhere.
    #[default]
    Normal,
    /// Pointer is over the element.
    Hovered,
}

/// Declarations for the resting state plus an optional hover overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractiveStyle {
    /// Applied when the pointer leaves.
    pub normal: Declarations,
    /// Patched over `normal` when the pointer enters.
    pub hover: Option<Declarations>,
}

impl InteractiveStyle {
    #[must_use]
    pub fn new(normal: Declarations) -> Self {
        Self {
            normal,
            hover: None,
        }
    }

    /// Set the hover overlay.
    #[must_use]
    pub fn hover(mut self, declarations: Declarations) -> Self {
        self.hover = Some(declarations);
        self
    }

    /// Declarations to write for `state`.
    ///
    /// Properties keep the order of `normal`; hover-only properties are
    /// appended in their own order.
    #[must_use]
    pub fn resolve(&self, state: InteractionState) -> Declarations {
        let mut out = self.normal.clone();
        let overlay = match state {
            InteractionState::Normal => return out,
            InteractionState::Hovered => match &self.hover {
                Some(h) => h,
                None => return out,
            },
        };
        for (property, value) in overlay {
            match out.iter_mut().find(|(p, _)| p == property) {
                Some(slot) => slot.1.clone_from(value),
                None => out.push((*property, value.clone())),
            }
        }
        out
    }

    /// Every property either state may write.
    #[must_use]
    pub fn properties(&self) -> Vec<StyleProperty> {
        let mut props: Vec<StyleProperty> = self.normal.iter().map(|(p, _)| *p).collect();
        for (p, _) in self.hover.iter().flatten() {
            if !props.contains(p) {
                props.push(*p);
            }
        }
        props
    }

    #[must_use]
    pub fn has_hover(&self) -> bool {
        self.hover.is_some()
    }
}
