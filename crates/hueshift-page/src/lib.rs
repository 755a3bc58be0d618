#![forbid(unsafe_code)]

//! Document styling for hueshift.
//!
//! # Role in hueshift
//! `hueshift-page` takes a [`Palette`](hueshift_color::Palette) from
//! `hueshift-color` and writes it into a document as inline styles. The
//! document is abstract: anything implementing [`ElementProvider`] works,
//! whether that is the browser DOM (`hueshift-wasm`) or the in-crate
//! [`MemoryDocument`].
//!
//! # This crate provides
//! - [`ElementProvider`], [`ElementRole`] and [`StyleProperty`], the
//!   document seam.
//! - [`apply_palette`] and the per-role `style_*` functions.
//! - [`StyleSession`], returned by an apply and consumed by its revert.
//! - [`StyleConfig`], every styling constant as data.
//!
//! # Example
//!
//! ```
//! use hueshift_color::Palette;
//! use hueshift_page::{MemoryDocument, StyleConfig, StyleProperty, apply_palette};
//!
//! let mut doc = MemoryDocument::new();
//! let link = doc.append(doc.body_id(), "a");
//!
//! let session = apply_palette(&mut doc, Palette::from_hsv(0.6, 0.8, 0.9), &StyleConfig::default());
//! assert_eq!(doc.inline(link, StyleProperty::Color), "#000000");
//!
//! session.revert(&mut doc);
//! assert_eq!(doc.inline(link, StyleProperty::Color), "");
//! ```

pub mod apply;
pub mod config;
pub mod element;
pub mod interactive;
pub mod memory;
pub mod session;

pub use apply::{
    DEFAULT_BACKGROUND, apply_palette, button_hover_style, resolve_background, style_buttons,
    style_containers, style_headers, style_links,
};
pub use config::{ButtonStyle, ConfigError, ContainerStyle, HeaderStyle, StyleConfig};
pub use element::{ElementProvider, ElementRole, StyleProperty, heading_level, longhands_of};
pub use interactive::{InteractionState, InteractiveStyle};
pub use memory::{MemoryDocument, NodeId, TRANSPARENT_BACKGROUND};
pub use session::{RevertReport, StyleSession, StyleSnapshot};
