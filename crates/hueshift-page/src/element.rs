#![forbid(unsafe_code)]

//! The document seam: element roles, writable style properties, and the
//! [`ElementProvider`] capability the applicator is driven through.
//!
//! The applicator never reaches for a global document. Hosts hand it a
//! provider: the browser binding in `hueshift-wasm`, or
//! [`MemoryDocument`](crate::memory::MemoryDocument) for native hosts and
//! tests.

use core::fmt;

use crate::interactive::InteractiveStyle;

/// Element classes the applicator styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRole {
    /// The document body. Only its `transition` is touched.
    Body,
    /// `h1` through `h6`.
    Heading,
    /// `button` and `input` of type `button` or `submit`.
    Button,
    /// `a`.
    Link,
    /// Sectioning elements: `header`, `footer`, `main`, `article`,
    /// `section`, `aside`.
    Container,
}

impl ElementRole {
    /// CSS selector list matching this role.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Heading => "h1, h2, h3, h4, h5, h6",
            Self::Button => r#"button, input[type="button"], input[type="submit"]"#,
            Self::Link => "a",
            Self::Container => "header, footer, main, article, section, aside",
        }
    }

    /// Whether an element with `tag` (and `input_type` for `<input>`)
    /// belongs to this role. Tag comparison is case-insensitive.
    #[must_use]
    pub fn matches(self, tag: &str, input_type: Option<&str>) -> bool {
        let tag = tag.to_ascii_lowercase();
        match self {
            Self::Body => tag == "body",
            Self::Heading => heading_level(&tag).is_some(),
            Self::Button => {
                tag == "button"
                    || (tag == "input"
                        && input_type.is_some_and(|t| {
                            t.eq_ignore_ascii_case("button") || t.eq_ignore_ascii_case("submit")
                        }))
            }
            Self::Link => tag == "a",
            Self::Container => matches!(
                tag.as_str(),
                "header" | "footer" | "main" | "article" | "section" | "aside"
            ),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Heading => "heading",
            Self::Button => "button",
            Self::Link => "link",
            Self::Container => "container",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Heading level for tags `h1`..`h6` (any case).
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    let bytes = tag.as_bytes();
    if bytes.len() != 2 || !bytes[0].eq_ignore_ascii_case(&b'h') {
        return None;
    }
    match bytes[1] {
        d @ b'1'..=b'6' => Some(d - b'0'),
        _ => None,
    }
}

/// Inline style properties the applicator is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Color,
    BackgroundColor,
    Background,
    Padding,
    BorderRadius,
    TextShadow,
    BoxShadow,
    Transition,
    Cursor,
    Transform,
}

impl StyleProperty {
    pub const ALL: [Self; 10] = [
        Self::Color,
        Self::BackgroundColor,
        Self::Background,
        Self::Padding,
        Self::BorderRadius,
        Self::TextShadow,
        Self::BoxShadow,
        Self::Transition,
        Self::Cursor,
        Self::Transform,
    ];

    /// Property name as used by `CSSStyleDeclaration.setProperty`.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Background => "background",
            Self::Padding => "padding",
            Self::BorderRadius => "border-radius",
            Self::TextShadow => "text-shadow",
            Self::BoxShadow => "box-shadow",
            Self::Transition => "transition",
            Self::Cursor => "cursor",
            Self::Transform => "transform",
        }
    }

    /// Longhands this property resets when written; empty for longhands.
    #[must_use]
    pub fn longhands(self) -> &'static [&'static str] {
        longhands_of(self.css_name())
    }

    #[must_use]
    pub fn is_shorthand(self) -> bool {
        !self.longhands().is_empty()
    }
}

/// Longhands of the CSS shorthand `name`, for the shorthands the applicator
/// writes. Empty for anything else.
#[must_use]
pub fn longhands_of(name: &str) -> &'static [&'static str] {
    match name {
        "background" => &[
            "background-color",
            "background-image",
            "background-position-x",
            "background-position-y",
            "background-size",
            "background-repeat",
            "background-attachment",
            "background-origin",
            "background-clip",
        ],
        "padding" => &["padding-top", "padding-right", "padding-bottom", "padding-left"],
        "border-radius" => &[
            "border-top-left-radius",
            "border-top-right-radius",
            "border-bottom-right-radius",
            "border-bottom-left-radius",
        ],
        "transition" => &[
            "transition-property",
            "transition-duration",
            "transition-timing-function",
            "transition-delay",
            "transition-behavior",
        ],
        _ => &[],
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Read/write access to a document.
///
/// Implementations must never fail hard: a query that finds nothing returns
/// an empty list, and writes to elements that have left the document are
/// ignored.
pub trait ElementProvider {
    /// Element handle. Cloning must preserve identity.
    type Element: Clone + fmt::Debug;

    /// All elements of `role` in document order.
    fn query(&self, role: ElementRole) -> Vec<Self::Element>;

    /// Parent element, or `None` at the root.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Tag name, in whatever case the document reports.
    fn tag_name(&self, element: &Self::Element) -> String;

    /// Resolved `background-color` as the document serializes it.
    fn computed_background(&self, element: &Self::Element) -> String;

    /// Current inline value of `property`; empty when unset.
    fn inline_style(&self, element: &Self::Element, property: StyleProperty) -> String;

    /// Set an inline value. An empty `value` removes the override.
    fn set_inline_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);

    /// The element's whole inline style, serialized like `cssText`.
    fn style_text(&self, element: &Self::Element) -> String;

    /// Replace the element's whole inline style with `text`, as assigning
    /// `cssText` does.
    fn set_style_text(&mut self, element: &Self::Element, text: &str);

    /// Whether the element is still part of the document.
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Attach a hover affordance. Providers without pointer input may
    /// ignore it.
    fn install_hover(&mut self, element: &Self::Element, style: &InteractiveStyle) {
        let _ = (element, style);
    }

    /// The document body, if any.
    fn body(&self) -> Option<Self::Element> {
        self.query(ElementRole::Body).into_iter().next()
    }
}
