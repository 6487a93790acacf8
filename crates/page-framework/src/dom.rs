//! # Document Port
//!
//! An in-process element tree that stands in for the browser DOM. Pages render into it,
//! the runtime routes events against it, and tests inspect it.
//!
//! Nodes live in a [`Slab`] arena. A [`NodeId`] carries the slot *and* a stamp, so an id
//! taken from a region that has since been cleared never resolves to whatever element
//! reused the slot.
//!
//! ```rust
//! use page_framework::dom::{Document, Element};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let section = doc.append(body, Element::new("section").with_id("menu")).unwrap();
//! let button = doc
//!     .append(section, Element::new("button").with_data("product", "1").with_text("+"))
//!     .unwrap();
//!
//! assert_eq!(doc.by_id("menu"), Some(section));
//! assert!(doc.contains(section, button));
//! assert_eq!(
//!     doc.outer_html(section).unwrap(),
//!     r#"<section id="menu"><button data-product="1">+</button></section>"#
//! );
//! ```

use slab::Slab;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Write};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    slot: usize,
    stamp: u64,
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}.{}", self.slot, self.stamp)
    }
}

/// Errors raised by document operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DomError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Node is not attached to the document: {0}")]
    Detached(NodeId),
}

/// A single element: tag, identity, classes, `data-*` tags, plain attributes and text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    data: BTreeMap<String, String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    value: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Tags the element with `data-<key>="<value>"`.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Current value of a form control. `None` until something is typed into it.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    fn is_void(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "br" | "hr" | "img")
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    stamp: u64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The element tree. Always has a `body` root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Slab<Node>,
    next_stamp: u64,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = Slab::new();
        let slot = nodes.insert(Node {
            element: Element::new("body"),
            stamp: 0,
            parent: None,
            children: Vec::new(),
        });
        Self {
            nodes,
            next_stamp: 1,
            body: NodeId { slot, stamp: 0 },
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of live elements, including `body`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes
            .get(id.slot)
            .filter(|node| node.stamp == id.stamp)
            .ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes
            .get_mut(id.slot)
            .filter(|node| node.stamp == id.stamp)
            .ok_or(DomError::UnknownNode(id))
    }

    pub fn element(&self, id: NodeId) -> Result<&Element, DomError> {
        self.node(id).map(|node| &node.element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        self.node_mut(id).map(|node| &mut node.element)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        self.node(id).map(|node| node.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(|node| node.parent)
    }

    /// Appends `element` as the last child of `parent` and returns its id.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        self.node(parent)?;
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        let slot = self.nodes.insert(Node {
            element,
            stamp,
            parent: Some(parent),
            children: Vec::new(),
        });
        let id = NodeId { slot, stamp };
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Removes every descendant of `id`, leaving the element itself in place.
    pub fn clear_children(&mut self, id: NodeId) -> Result<(), DomError> {
        let mut pending = std::mem::take(&mut self.node_mut(id)?.children);
        while let Some(child) = pending.pop() {
            if self.node(child).is_ok() {
                let node = self.nodes.remove(child.slot);
                pending.extend(node.children);
            }
        }
        Ok(())
    }

    /// True when `node` is `ancestor` or lies somewhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// True when `node` is live and reachable from `body`.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.node(node).is_ok() && self.contains(self.body, node)
    }

    /// Descendants of `root` in document order, excluding `root` itself.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.children(root) {
            Ok(children) => children.iter().rev().copied().collect(),
            Err(_) => return out,
        };
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Ok(children) = self.children(id) {
                stack.extend(children.iter().rev().copied());
            }
        }
        out
    }

    /// First descendant of `root` (document order) whose element matches `pred`.
    pub fn find(&self, root: NodeId, pred: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.element(*id).map(&pred).unwrap_or(false))
    }

    pub fn find_all(&self, root: NodeId, pred: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.element(*id).map(&pred).unwrap_or(false))
            .collect()
    }

    /// Looks up an attached element by its `id` attribute.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.find(self.body, |el| el.id() == Some(id))
    }

    /// Concatenated text of `root` and its descendants.
    pub fn text_content(&self, root: NodeId) -> String {
        std::iter::once(root)
            .chain(self.descendants(root))
            .filter_map(|id| self.element(id).ok().and_then(Element::text))
            .collect()
    }

    pub fn outer_html(&self, id: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        self.write_html(id, &mut out)?;
        Ok(out)
    }

    /// Serializes the whole document, starting at `body`.
    pub fn to_html(&self) -> String {
        self.outer_html(self.body).unwrap_or_default()
    }

    fn write_html(&self, id: NodeId, out: &mut String) -> Result<(), DomError> {
        let node = self.node(id)?;
        let el = &node.element;

        out.push('<');
        out.push_str(&el.tag);
        if let Some(id) = &el.id {
            write_attr(out, "id", id);
        }
        if !el.classes.is_empty() {
            write_attr(out, "class", &el.classes.join(" "));
        }
        for (key, value) in &el.data {
            write_attr(out, &format!("data-{key}"), value);
        }
        for (key, value) in &el.attrs {
            write_attr(out, key, value);
        }
        if let Some(value) = &el.value {
            write_attr(out, "value", value);
        }
        out.push('>');

        if el.is_void() {
            return Ok(());
        }
        if let Some(text) = &el.text {
            out.push_str(&escape(text));
        }
        for child in &node.children {
            self.write_html(*child, out)?;
        }
        let _ = write!(out, "</{}>", el.tag);
        Ok(())
    }
}

fn write_attr(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", key, escape(value));
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(doc: &mut Document, items: &[&str]) -> NodeId {
        let body = doc.body();
        let ul = doc.append(body, Element::new("ul").with_id("list")).unwrap();
        for item in items {
            doc.append(ul, Element::new("li").with_text(*item)).unwrap();
        }
        ul
    }

    #[test]
    fn test_clear_children_drops_whole_subtree() {
        let mut doc = Document::new();
        let ul = list(&mut doc, &["a", "b"]);
        let first = doc.children(ul).unwrap()[0];
        doc.append(first, Element::new("span").with_text("nested")).unwrap();
        assert_eq!(doc.len(), 5);

        doc.clear_children(ul).unwrap();

        assert_eq!(doc.len(), 2);
        assert!(doc.children(ul).unwrap().is_empty());
        assert_eq!(doc.element(first), Err(DomError::UnknownNode(first)));
    }

    #[test]
    fn test_stale_id_does_not_resolve_to_reused_slot() {
        let mut doc = Document::new();
        let ul = list(&mut doc, &["old"]);
        let stale = doc.children(ul).unwrap()[0];

        doc.clear_children(ul).unwrap();
        let fresh = doc.append(ul, Element::new("li").with_text("new")).unwrap();

        assert_ne!(stale, fresh);
        assert!(doc.element(stale).is_err());
        assert!(!doc.is_attached(stale));
        assert!(doc.is_attached(fresh));
    }

    #[test]
    fn test_contains_includes_self_and_descendants_only() {
        let mut doc = Document::new();
        let body = doc.body();
        let outer = doc.append(body, Element::new("div").with_id("outer")).unwrap();
        let inner = doc.append(outer, Element::new("div").with_id("inner")).unwrap();
        let leaf = doc.append(inner, Element::new("p")).unwrap();
        let sibling = doc.append(body, Element::new("div")).unwrap();

        assert!(doc.contains(outer, outer));
        assert!(doc.contains(outer, leaf));
        assert!(doc.contains(inner, leaf));
        assert!(!doc.contains(inner, outer));
        assert!(!doc.contains(outer, sibling));
    }

    #[test]
    fn test_find_walks_in_document_order() {
        let mut doc = Document::new();
        let ul = list(&mut doc, &["a", "b", "c"]);
        let texts: Vec<String> = doc
            .find_all(ul, |el| el.tag() == "li")
            .into_iter()
            .map(|id| doc.text_content(id))
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(doc.text_content(ul), "abc");
        assert_eq!(doc.by_id("list"), Some(ul));
        assert_eq!(doc.by_id("missing"), None);
    }

    #[test]
    fn test_html_escapes_text_and_attributes() {
        let mut doc = Document::new();
        let body = doc.body();
        let p = doc
            .append(
                body,
                Element::new("p")
                    .with_class("a")
                    .with_class("b")
                    .with_attr("title", "\"quoted\"")
                    .with_text("fish & <chips>"),
            )
            .unwrap();
        assert_eq!(
            doc.outer_html(p).unwrap(),
            r#"<p class="a b" title="&quot;quoted&quot;">fish &amp; &lt;chips&gt;</p>"#
        );
    }

    #[test]
    fn test_input_is_void_and_carries_value() {
        let mut doc = Document::new();
        let body = doc.body();
        let input = doc
            .append(body, Element::new("input").with_attr("name", "name"))
            .unwrap();
        doc.element_mut(input).unwrap().set_value("Sam");
        assert_eq!(
            doc.outer_html(input).unwrap(),
            r#"<input name="name" value="Sam">"#
        );
    }

    #[test]
    fn test_classes_are_deduplicated() {
        let mut el = Element::new("body").with_class("modal-open");
        el.add_class("modal-open");
        assert_eq!(el.classes().len(), 1);
        el.remove_class("modal-open");
        assert!(!el.has_class("modal-open"));
    }
}
