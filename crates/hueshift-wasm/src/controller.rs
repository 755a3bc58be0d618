#![forbid(unsafe_code)]

//! Platform-independent controller behind the injected controls.
//!
//! This module owns the RNG, the style configuration and the live session.
//! The wasm layer forwards clicks here with a DOM provider; native tests
//! drive it with a `MemoryDocument`. No JS/WASM types here.

use core::fmt;

use hueshift_color::Palette;
use hueshift_page::{ElementProvider, RevertReport, StyleConfig, StyleSession, apply_palette};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::controls::ControlAction;

/// Result of dispatching one control click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlOutcome {
    Applied(Palette),
    Reverted(RevertReport),
    /// Revert clicked with nothing applied.
    NothingToRevert,
}

/// Apply/revert state for one page.
pub struct Controller<E> {
    config: StyleConfig,
    rng: SmallRng,
    /// Session of the most recent apply. Replaced by each apply.
    session: Option<StyleSession<E>>,
    applies: u64,
}

impl<E: Clone + fmt::Debug> Controller<E> {
    /// Controller with a deterministic palette sequence.
    #[must_use]
    pub fn new(config: StyleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            session: None,
            applies: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StyleConfig {
        &self.config
    }

    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Palette currently applied, if any.
    #[must_use]
    pub fn current_palette(&self) -> Option<Palette> {
        self.session.as_ref().map(|s| *s.palette())
    }

    /// Number of applies so far.
    #[must_use]
    pub const fn applies(&self) -> u64 {
        self.applies
    }

    /// Draw a palette and apply it. The previous session, if any, is
    /// dropped without reverting.
    pub fn on_apply<P>(&mut self, provider: &mut P) -> Palette
    where
        P: ElementProvider<Element = E> + ?Sized,
    {
        let palette = Palette::generate(&mut self.rng, &self.config.palette);
        if self.session.is_some() {
            tracing::debug!("replacing previous style session");
        }
        self.session = Some(apply_palette(provider, palette, &self.config));
        self.applies += 1;
        palette
    }

    /// Revert the most recent apply. `None` when nothing is applied.
    pub fn on_revert<P>(&mut self, provider: &mut P) -> Option<RevertReport>
    where
        P: ElementProvider<Element = E> + ?Sized,
    {
        let Some(session) = self.session.take() else {
            tracing::debug!("revert requested with no active session");
            return None;
        };
        Some(session.revert(provider))
    }

    /// Route a control click.
    pub fn dispatch<P>(&mut self, action: ControlAction, provider: &mut P) -> ControlOutcome
    where
        P: ElementProvider<Element = E> + ?Sized,
    {
        tracing::trace!(action = action.label(), "control clicked");
        match action {
            ControlAction::Apply => ControlOutcome::Applied(self.on_apply(provider)),
            ControlAction::Revert => self
                .on_revert(provider)
                .map_or(ControlOutcome::NothingToRevert, ControlOutcome::Reverted),
        }
    }
}
