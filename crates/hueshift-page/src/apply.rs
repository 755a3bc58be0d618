#![forbid(unsafe_code)]

//! Palette application.
//!
//! Each `style_*` function handles one [`ElementRole`]: it snapshots the
//! inline properties it is about to write into the session, then writes
//! them. [`apply_palette`] runs all four plus the body transition and hands
//! back the filled session.
//!
//! Text colors are always black or white, picked by
//! [`readable_text_color`] against the background the element will show.

use hueshift_color::{Palette, Rgb, is_transparent, readable_text_color};

use crate::config::StyleConfig;
use crate::element::{ElementProvider, ElementRole, StyleProperty, heading_level};
use crate::interactive::InteractiveStyle;
use crate::session::StyleSession;

/// Background assumed when no element up the tree paints one.
pub const DEFAULT_BACKGROUND: &str = "white";

const GRADIENT_HEADING_PROPS: [StyleProperty; 6] = [
    StyleProperty::Padding,
    StyleProperty::BorderRadius,
    StyleProperty::Background,
    StyleProperty::BackgroundColor,
    StyleProperty::Color,
    StyleProperty::TextShadow,
];

const FLAT_HEADING_PROPS: [StyleProperty; 3] = [
    StyleProperty::BackgroundColor,
    StyleProperty::Color,
    StyleProperty::TextShadow,
];

const BUTTON_PROPS: [StyleProperty; 6] = [
    StyleProperty::BackgroundColor,
    StyleProperty::Color,
    StyleProperty::BoxShadow,
    StyleProperty::Transition,
    StyleProperty::Cursor,
    StyleProperty::Transform,
];

const LINK_PROPS: [StyleProperty; 1] = [StyleProperty::Color];

const CONTAINER_PROPS: [StyleProperty; 2] = [StyleProperty::BackgroundColor, StyleProperty::Color];

/// Nearest non-transparent computed background of `element` or an
/// ancestor, as the document serializes it.
///
/// Falls back to [`DEFAULT_BACKGROUND`] when the walk reaches the root.
pub fn resolve_background<P>(provider: &P, element: &P::Element) -> String
where
    P: ElementProvider + ?Sized,
{
    let mut current = Some(element.clone());
    while let Some(el) = current {
        let background = provider.computed_background(&el);
        if !is_transparent(&background) {
            return background;
        }
        current = provider.parent(&el);
    }
    DEFAULT_BACKGROUND.to_string()
}

/// Headings: gradient for shallow levels, flat secondary below, readable
/// text against the secondary color.
pub fn style_headers<P>(
    provider: &mut P,
    session: &mut StyleSession<P::Element>,
    palette: &Palette,
    config: &StyleConfig,
) where
    P: ElementProvider + ?Sized,
{
    let headers = &config.headers;
    let text = readable_text_color(palette.secondary).to_hex();
    let gradient = headers.gradient(palette.secondary, palette.accent);
    let flat = palette.secondary.to_hex();

    for heading in provider.query(ElementRole::Heading) {
        let tag = provider.tag_name(&heading);
        let level = heading_level(&tag).unwrap_or(6);
        let backdrop = resolve_background(provider, &heading);
        tracing::trace!(tag = %tag, level, backdrop = %backdrop, "styling heading");

        if level <= headers.gradient_max_level {
            session.capture(provider, &heading, ElementRole::Heading, &GRADIENT_HEADING_PROPS);
            provider.set_inline_style(&heading, StyleProperty::Padding, &headers.padding);
            provider.set_inline_style(&heading, StyleProperty::BorderRadius, &headers.border_radius);
            provider.set_inline_style(&heading, StyleProperty::Background, &gradient);
        } else {
            session.capture(provider, &heading, ElementRole::Heading, &FLAT_HEADING_PROPS);
            provider.set_inline_style(&heading, StyleProperty::BackgroundColor, &flat);
        }
        provider.set_inline_style(&heading, StyleProperty::Color, &text);
        provider.set_inline_style(&heading, StyleProperty::TextShadow, &headers.text_shadow);
    }
}

/// Hover affordance for buttons: a tighter shadow and a small lift.
#[must_use]
pub fn button_hover_style(palette: &Palette, config: &StyleConfig) -> InteractiveStyle {
    let buttons = &config.buttons;
    let accent = palette.accent.to_hex();
    InteractiveStyle::new(vec![
        (StyleProperty::BoxShadow, format!("{} {accent}", buttons.shadow)),
        (StyleProperty::Transform, buttons.rest_transform.clone()),
    ])
    .hover(vec![
        (
            StyleProperty::BoxShadow,
            format!("{} {accent}", buttons.hover_shadow),
        ),
        (StyleProperty::Transform, buttons.hover_transform.clone()),
    ])
}

/// Buttons: primary background, readable text, accent shadow, hover lift.
pub fn style_buttons<P>(
    provider: &mut P,
    session: &mut StyleSession<P::Element>,
    palette: &Palette,
    config: &StyleConfig,
) where
    P: ElementProvider + ?Sized,
{
    let buttons = &config.buttons;
    let background = palette.primary.to_hex();
    let text = readable_text_color(palette.primary).to_hex();
    let shadow = format!("{} {}", buttons.shadow, palette.accent.to_hex());
    let hover = button_hover_style(palette, config);

    for button in provider.query(ElementRole::Button) {
        session.capture(provider, &button, ElementRole::Button, &BUTTON_PROPS);
        provider.set_inline_style(&button, StyleProperty::BackgroundColor, &background);
        provider.set_inline_style(&button, StyleProperty::Color, &text);
        provider.set_inline_style(&button, StyleProperty::BoxShadow, &shadow);
        provider.set_inline_style(&button, StyleProperty::Transition, &buttons.transition);
        provider.set_inline_style(&button, StyleProperty::Cursor, &buttons.cursor);
        provider.install_hover(&button, &hover);
    }
}

/// Links: readable text against the page body's background.
///
/// A body background that cannot be parsed as a color counts as white.
pub fn style_links<P>(
    provider: &mut P,
    session: &mut StyleSession<P::Element>,
    _palette: &Palette,
    _config: &StyleConfig,
) where
    P: ElementProvider + ?Sized,
{
    let links = provider.query(ElementRole::Link);
    if links.is_empty() {
        return;
    }

    let backdrop = provider
        .body()
        .map_or_else(|| DEFAULT_BACKGROUND.to_string(), |body| resolve_background(provider, &body));
    let page = Rgb::from_css(&backdrop).unwrap_or_else(|| {
        tracing::debug!(backdrop = %backdrop, "unparseable body background, assuming white");
        Rgb::WHITE
    });
    let text = readable_text_color(page).to_hex();

    for link in links {
        session.capture(provider, &link, ElementRole::Link, &LINK_PROPS);
        provider.set_inline_style(&link, StyleProperty::Color, &text);
    }
}

/// Containers: translucent secondary background, readable text against the
/// opaque secondary (alpha does not enter the contrast decision).
pub fn style_containers<P>(
    provider: &mut P,
    session: &mut StyleSession<P::Element>,
    palette: &Palette,
    config: &StyleConfig,
) where
    P: ElementProvider + ?Sized,
{
    let background = palette
        .secondary
        .to_hex_with_alpha(config.containers.background_alpha);
    let text = readable_text_color(palette.secondary).to_hex();

    for container in provider.query(ElementRole::Container) {
        session.capture(provider, &container, ElementRole::Container, &CONTAINER_PROPS);
        provider.set_inline_style(&container, StyleProperty::BackgroundColor, &background);
        provider.set_inline_style(&container, StyleProperty::Color, &text);
    }
}

/// Apply `palette` to the whole document and return the session that
/// reverts it.
pub fn apply_palette<P>(
    provider: &mut P,
    palette: Palette,
    config: &StyleConfig,
) -> StyleSession<P::Element>
where
    P: ElementProvider + ?Sized,
{
    let _span = tracing::debug_span!(
        "hueshift.apply",
        primary = %palette.primary,
        secondary = %palette.secondary,
        accent = %palette.accent,
    )
    .entered();

    let mut session = StyleSession::new(palette);

    if let Some(body) = provider.body() {
        session.capture(provider, &body, ElementRole::Body, &[StyleProperty::Transition]);
        provider.set_inline_style(&body, StyleProperty::Transition, &config.body_transition);
    }

    style_headers(provider, &mut session, &palette, config);
    style_buttons(provider, &mut session, &palette, config);
    style_links(provider, &mut session, &palette, config);
    style_containers(provider, &mut session, &palette, config);

    tracing::debug!(
        headings = session.count(ElementRole::Heading),
        buttons = session.count(ElementRole::Button),
        links = session.count(ElementRole::Link),
        containers = session.count(ElementRole::Container),
        "palette applied"
    );
    session
}
