// SPDX-License-Identifier: MPL-2.0
//! In-memory model of a server-rendered page.
//!
//! The page is the only resource shared between the behaviors of this crate:
//! the auto-dismiss manager restyles and removes the elements it queried at
//! load time, and the host application removes rows after a confirmed
//! deletion. Nodes live in an arena and are addressed by [`NodeId`]; removal
//! detaches a node and its subtree from the live tree without invalidating
//! ids handed out earlier.
//!
//! # Components
//!
//! - [`selector`] - structural patterns used to find elements
//! - [`style`] - inline style, transitions and easing curves
//! - [`markup`] - loading XHTML markup into a [`Document`]

pub mod markup;
pub mod selector;
pub mod style;

pub use selector::Selector;
pub use style::{Easing, Style, Transition, Visual};

use std::time::Instant;
use style::Animation;

/// Handle to a node of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An element node: tag name, class list and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
}

impl Element {
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the value of an attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Root,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attached: bool,
    style: Style,
    animation: Option<Animation>,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            attached: true,
            style: Style::default(),
            animation: None,
        }
    }
}

/// A page tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, None)],
        }
    }

    /// Returns the root node. The root is not an element and never matches
    /// a selector.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends an element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let element = Element {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            attributes: Vec::new(),
        };
        self.push_node(parent, NodeKind::Element(element))
    }

    /// Appends a text run as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push_node(parent, NodeKind::Text(text.to_string()))
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(kind, Some(parent));
        node.attached = self.nodes[parent.0].attached;
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Sets an attribute on an element. `class` replaces the class list.
    /// Has no effect on text nodes or the root.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element(element) = &mut self.nodes[id.0].kind {
            if name == "class" {
                element.classes = value.split_whitespace().map(str::to_string).collect();
                return;
            }
            match element.attributes.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => element
                    .attributes
                    .push((name.to_string(), value.to_string())),
            }
        }
    }

    /// Returns the element data of `id`, or `None` for text and the root.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            NodeKind::Root | NodeKind::Text(_) => None,
        }
    }

    /// Returns the text of a text node.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) => Some(text),
            NodeKind::Root | NodeKind::Element(_) => None,
        }
    }

    /// Concatenated text of all descendants, separated by single spaces.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.walk(id, &mut |node_id| {
            if let Some(text) = self.text(node_id) {
                parts.push(text.to_string());
            }
        });
        parts.join(" ")
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Attached children of `id`, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Returns whether `id` is still part of the live tree.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.nodes[id.0].attached
    }

    /// Walks from `id` up to the root and returns the first element
    /// satisfying `predicate`, starting with `id` itself.
    pub fn closest(&self, id: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.element(current).is_some_and(&predicate) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// All attached elements matching `selector`, in document order.
    #[must_use]
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut matches = Vec::new();
        self.walk(self.root(), &mut |id| {
            if selector.matches(self, id) {
                matches.push(id);
            }
        });
        matches
    }

    /// Number of attached nodes below the root.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        let mut count = 0;
        self.walk(self.root(), &mut |_| count += 1);
        count - 1
    }

    /// Pre-order traversal over the attached subtree rooted at `id`.
    fn walk(&self, id: NodeId, visit: &mut dyn FnMut(NodeId)) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !self.is_attached(current) {
                continue;
            }
            visit(current);
            // reversed so the leftmost child is visited next
            stack.extend(self.nodes[current.0].children.iter().rev().copied());
        }
    }

    /// Detaches `id` and its subtree from the live tree.
    ///
    /// Returns `true` when the node was attached. Removing the root or an
    /// already detached node does nothing.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root() || !self.is_attached(id) {
            return false;
        }

        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            node.attached = false;
            node.animation = None;
            stack.extend(node.children.iter().copied());
        }
        true
    }

    /// Current inline style of `id`.
    #[must_use]
    pub fn style(&self, id: NodeId) -> &Style {
        &self.nodes[id.0].style
    }

    /// Replaces the inline style of `id`.
    ///
    /// When the new style carries a transition, the change animates from the
    /// values rendered at `now` toward the new values.
    pub fn set_style(&mut self, id: NodeId, style: Style, now: Instant) {
        let from = self.visual(id, now);
        let node = &mut self.nodes[id.0];
        node.animation = style
            .transition
            .map(|transition| Animation::new(from, style.visual(), now, transition));
        node.style = style;
    }

    /// Opacity and offset of `id` as rendered at `now`.
    #[must_use]
    pub fn visual(&self, id: NodeId, now: Instant) -> Visual {
        let node = &self.nodes[id.0];
        match &node.animation {
            Some(animation) => animation.sample(now),
            None => node.style.visual(),
        }
    }

    /// Returns whether any attached node still has a running transition.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.nodes
            .iter()
            .filter(|node| node.attached)
            .filter_map(|node| node.animation.as_ref())
            .any(|animation| !animation.is_finished(now))
    }
}
