#![forbid(unsafe_code)]

//! In-memory document for native hosts and tests.
//!
//! [`MemoryDocument`] is a minimal element tree that implements
//! [`ElementProvider`]. It models exactly what the applicator observes:
//! tag names, parent links, computed backgrounds, inline styles, attachment,
//! and installed hover affordances.
//!
//! Inline styles behave like a `CSSStyleDeclaration` for the shorthands the
//! applicator writes: writing or removing `padding` drops any `padding-*`
//! longhands, and the whole declaration block round-trips through
//! [`ElementProvider::style_text`]. Writing a longhand next to its shorthand
//! keeps both declarations instead of re-expanding the shorthand.
//!
//! ```
//! use hueshift_page::{ElementProvider, ElementRole, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body_id();
//! let main = doc.append(body, "main");
//! doc.append(main, "h1");
//! assert_eq!(doc.query(ElementRole::Heading).len(), 1);
//! ```

use crate::element::{ElementProvider, ElementRole, StyleProperty, longhands_of};
use crate::interactive::{InteractionState, InteractiveStyle};

/// Computed background of an element with nothing painted behind it.
pub const TRANSPARENT_BACKGROUND: &str = "rgba(0, 0, 0, 0)";

/// Handle to a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    input_type: Option<String>,
    parent: Option<NodeId>,
    computed_background: String,
    /// `(css name, value)` in declaration order.
    inline: Vec<(String, String)>,
    attached: bool,
    hover: Option<InteractiveStyle>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_uppercase(),
            input_type: None,
            parent,
            computed_background: TRANSPARENT_BACKGROUND.to_string(),
            inline: Vec::new(),
            attached: true,
            hover: None,
        }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.inline
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn remove(&mut self, name: &str) {
        self.inline.retain(|(n, _)| n != name);
    }

    fn write(&mut self, name: &str, value: &str) {
        for longhand in longhands_of(name) {
            self.remove(longhand);
        }
        if value.is_empty() {
            self.remove(name);
            return;
        }
        match self.inline.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => value.clone_into(&mut slot.1),
            None => self.inline.push((name.to_string(), value.to_string())),
        }
    }

    fn css_text(&self) -> String {
        self.inline
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A tree of elements rooted at `<html>` with a `<body>` child.
///
/// Nodes are stored in creation order, which doubles as document order for
/// queries.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let html = Node::new("html", None);
        let body = Node::new("body", Some(NodeId(0)));
        Self {
            nodes: vec![html, body],
            body: NodeId(1),
        }
    }

    #[must_use]
    pub const fn html_id(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub const fn body_id(&self) -> NodeId {
        self.body
    }

    /// Append a child element and return its handle.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        id
    }

    /// Append an `<input type=...>` element.
    pub fn append_input(&mut self, parent: NodeId, input_type: &str) -> NodeId {
        let id = self.append(parent, "input");
        self.nodes[id.0].input_type = Some(input_type.to_string());
        id
    }

    /// Set the computed background reported when no inline
    /// `background-color` is present.
    pub fn set_computed_background(&mut self, id: NodeId, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.computed_background = value.to_string();
        }
    }

    /// Inline value of `property`, or `""`.
    #[must_use]
    pub fn inline(&self, id: NodeId, property: StyleProperty) -> &str {
        self.declaration(id, property.css_name())
    }

    /// Inline value of any property by css name, or `""`.
    #[must_use]
    pub fn declaration(&self, id: NodeId, name: &str) -> &str {
        self.nodes
            .get(id.0)
            .and_then(|node| node.get(name))
            .unwrap_or("")
    }

    /// Write any inline property by css name, with the same shorthand
    /// handling as [`ElementProvider::set_inline_style`].
    pub fn set_declaration(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.write(name, value);
        }
    }

    /// Remove a node and its descendants from the document.
    ///
    /// Handles stay valid; they just stop being attached.
    pub fn detach(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0) {
                node.attached = false;
            }
            stack.extend(
                self.nodes
                    .iter()
                    .enumerate()
                    .filter(|(_, n)| n.parent == Some(current) && n.attached)
                    .map(|(i, _)| NodeId(i)),
            );
        }
    }

    /// Whether a hover affordance has been installed on `id`.
    #[must_use]
    pub fn has_hover(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|n| n.hover.is_some())
    }

    /// Simulate the pointer entering or leaving `id`.
    ///
    /// Returns `false` when no hover affordance is installed.
    pub fn hover(&mut self, id: NodeId, state: InteractionState) -> bool {
        let Some(style) = self.nodes.get(id.0).and_then(|n| n.hover.clone()) else {
            return false;
        };
        for (property, value) in style.resolve(state) {
            self.set_inline_style(&id, property, &value);
        }
        true
    }
}

impl ElementProvider for MemoryDocument {
    type Element = NodeId;

    fn query(&self, role: ElementRole) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.attached && role.matches(&n.tag, n.input_type.as_deref()))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.nodes.get(element.0).and_then(|n| n.parent)
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.nodes
            .get(element.0)
            .map(|n| n.tag.clone())
            .unwrap_or_default()
    }

    fn computed_background(&self, element: &NodeId) -> String {
        let Some(node) = self.nodes.get(element.0) else {
            return TRANSPARENT_BACKGROUND.to_string();
        };
        node.get(StyleProperty::BackgroundColor.css_name())
            .unwrap_or(node.computed_background.as_str())
            .to_string()
    }

    fn inline_style(&self, element: &NodeId, property: StyleProperty) -> String {
        self.inline(*element, property).to_string()
    }

    fn set_inline_style(&mut self, element: &NodeId, property: StyleProperty, value: &str) {
        self.set_declaration(*element, property.css_name(), value);
    }

    fn style_text(&self, element: &NodeId) -> String {
        self.nodes
            .get(element.0)
            .map(Node::css_text)
            .unwrap_or_default()
    }

    fn set_style_text(&mut self, element: &NodeId, text: &str) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        node.inline.clear();
        let declarations = text
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
            .filter(|(name, value)| !name.is_empty() && !value.is_empty());
        for (name, value) in declarations {
            node.write(name, value);
        }
    }

    fn is_attached(&self, element: &NodeId) -> bool {
        self.nodes.get(element.0).is_some_and(|n| n.attached)
    }

    fn install_hover(&mut self, element: &NodeId, style: &InteractiveStyle) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.hover = Some(style.clone());
        }
    }
}
