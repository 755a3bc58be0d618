#![forbid(unsafe_code)]

//! Style snapshots and the revert path.
//!
//! Every apply returns a [`StyleSession`]: the palette that was applied plus
//! one [`StyleSnapshot`] per touched element, holding the element's whole
//! inline declaration block plus the values of the properties about to be
//! written. The caller owns the session and
//! hands it back to [`StyleSession::revert`] to undo the apply.
//!
//! Only one generation exists: a session knows nothing about earlier
//! applies, so applying twice and reverting the second session restores
//! the state left by the first apply, not the original page.
//!
//! # Restore order
//!
//! ```text
//! snapshots:  [body, h1, button, a, main]     (recording order)
//! revert:     main, a, button, h1, body       (reverse)
//! per entry:  the captured inline style text, written back whole
//! ```
//!
//! Reverse order makes double-touched elements come back to their earliest
//! value. Restoring the whole declaration block rather than each written
//! property keeps author longhands such as `padding-left` that a shorthand
//! write (`padding`) wiped out.

use core::fmt;

use hueshift_color::Palette;

use crate::element::{ElementProvider, ElementRole, StyleProperty};

/// Inline values of one element captured before it was styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSnapshot<E> {
    pub element: E,
    pub role: ElementRole,
    /// `(property, prior inline value)`; empty string means "was unset".
    pub prior: Vec<(StyleProperty, String)>,
    /// Whole inline declaration block, as [`ElementProvider::style_text`].
    pub style_text: String,
}

impl<E: Clone> StyleSnapshot<E> {
    /// Read the current inline values of `properties` on `element`.
    pub fn capture<P>(
        provider: &P,
        element: &E,
        role: ElementRole,
        properties: &[StyleProperty],
    ) -> Self
    where
        P: ElementProvider<Element = E> + ?Sized,
    {
        let prior = properties
            .iter()
            .map(|&property| (property, provider.inline_style(element, property)))
            .collect();
        Self {
            element: element.clone(),
            role,
            prior,
            style_text: provider.style_text(element),
        }
    }

    /// Prior value recorded for `property`, if it was captured.
    #[must_use]
    pub fn prior_value(&self, property: StyleProperty) -> Option<&str> {
        self.prior
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    fn restore<P>(&self, provider: &mut P) -> usize
    where
        P: ElementProvider<Element = E> + ?Sized,
    {
        provider.set_style_text(&self.element, &self.style_text);
        self.prior.len()
    }
}

/// Outcome of a revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevertReport {
    /// Elements whose properties were written back.
    pub restored_elements: usize,
    /// Properties the apply had written that are now back.
    pub restored_properties: usize,
    /// Elements skipped because they left the document.
    pub skipped_stale: usize,
}

/// One apply's worth of snapshots.
#[derive(Debug, Clone)]
pub struct StyleSession<E> {
    palette: Palette,
    snapshots: Vec<StyleSnapshot<E>>,
}

impl<E: Clone + fmt::Debug> StyleSession<E> {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            snapshots: Vec::new(),
        }
    }

    /// Palette this session applied.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Snapshot `properties` of `element` before they are written.
    pub fn capture<P>(
        &mut self,
        provider: &P,
        element: &E,
        role: ElementRole,
        properties: &[StyleProperty],
    ) where
        P: ElementProvider<Element = E> + ?Sized,
    {
        self.snapshots
            .push(StyleSnapshot::capture(provider, element, role, properties));
    }

    #[must_use]
    pub fn snapshots(&self) -> &[StyleSnapshot<E>] {
        &self.snapshots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of snapshots taken for `role`.
    #[must_use]
    pub fn count(&self, role: ElementRole) -> usize {
        self.snapshots.iter().filter(|s| s.role == role).count()
    }

    /// Write every captured value back, consuming the session.
    ///
    /// Elements that are no longer attached are skipped. Hover affordances
    /// installed during apply stay installed.
    pub fn revert<P>(self, provider: &mut P) -> RevertReport
    where
        P: ElementProvider<Element = E> + ?Sized,
    {
        let _span = tracing::debug_span!("hueshift.revert", snapshots = self.snapshots.len())
            .entered();

        let mut report = RevertReport::default();
        for snapshot in self.snapshots.iter().rev() {
            if !provider.is_attached(&snapshot.element) {
                tracing::debug!(
                    role = snapshot.role.label(),
                    element = ?snapshot.element,
                    "skipping stale element"
                );
                report.skipped_stale += 1;
                continue;
            }
            report.restored_properties += snapshot.restore(provider);
            report.restored_elements += 1;
        }

        tracing::debug!(
            restored_elements = report.restored_elements,
            restored_properties = report.restored_properties,
            skipped_stale = report.skipped_stale,
            "revert complete"
        );
        report
    }
}
