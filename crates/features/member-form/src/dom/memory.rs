//! Arena-backed document used headless and as the view model of the desktop shell.

use crate::dom::FormHost;
use crate::error::MemberFormError;
use fxhash::FxHashMap;
use sigi_domain::controls::{ControlKind, Display, Locks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Description of an element to append.
#[derive(Debug, Clone)]
pub struct Element {
    kind: ControlKind,
    id: Option<String>,
    classes: Vec<String>,
    display: Display,
    locks: Locks,
    value: String,
    text: String,
    input_type: Option<String>,
}

impl Element {
    pub const fn new(kind: ControlKind) -> Self {
        Self {
            kind,
            id: None,
            classes: Vec::new(),
            display: Display::Unset,
            locks: Locks::empty(),
            value: String::new(),
            text: String::new(),
            input_type: None,
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub const fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub const fn locked(mut self, locks: Locks) -> Self {
        self.locks = locks;
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Visible text of labels, buttons and options.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// `type` attribute of an input (`text`, `email`, `file`, ...).
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }
}

/// A node of the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub const fn kind(&self) -> ControlKind {
        self.element.kind
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.element.classes
    }

    pub const fn display(&self) -> Display {
        self.element.display
    }

    pub const fn locks(&self) -> Locks {
        self.element.locks
    }

    pub fn value(&self) -> &str {
        &self.element.value
    }

    pub fn text(&self) -> &str {
        &self.element.text
    }

    pub fn input_type(&self) -> &str {
        self.element.input_type.as_deref().unwrap_or("text")
    }

    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// In-memory document tree with an id index.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    ids: FxHashMap<String, NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document holding only the root container.
    pub fn new() -> Self {
        let root = Node { element: Element::new(ControlKind::Container), parent: None, children: Vec::new() };
        Self { nodes: vec![root], ids: FxHashMap::default() }
    }

    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `element` as the last child of `parent`.
    ///
    /// # Errors
    /// * [`MemberFormError::DuplicateElement`] if the id is already taken.
    /// * [`MemberFormError::Internal`] if `parent` does not belong to this document.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, MemberFormError> {
        if parent.0 >= self.nodes.len() {
            return Err(format!("unknown parent node {}", parent.0).into());
        }
        if let Some(id) = element.id.as_deref()
            && self.ids.contains_key(id)
        {
            return Err(MemberFormError::DuplicateElement { id: id.to_owned().into(), context: None });
        }

        let node_id = NodeId(self.nodes.len());
        if let Some(id) = &element.id {
            self.ids.insert(id.clone(), node_id);
        }
        self.nodes.push(Node { element, parent: Some(parent), children: Vec::new() });
        self.nodes[parent.0].children.push(node_id);

        Ok(node_id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).map(|node| &mut node.element)
    }

    /// All nodes below `from`, depth first, in document order.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> =
            self.node(from).map(|n| n.children.iter().rev().copied().collect()).unwrap_or_default();

        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.node(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn option_values(&self, select: NodeId) -> impl Iterator<Item = &str> {
        self.node(select)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.node(*child))
            .filter(|child| child.kind() == ControlKind::SelectOption)
            .map(Node::value)
    }
}

impl FormHost for MemoryDocument {
    type Handle = NodeId;

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    fn value(&self, el: NodeId) -> String {
        self.node(el).map(|n| n.value().to_owned()).unwrap_or_default()
    }

    fn set_value(&mut self, el: NodeId, value: &str) {
        let Some(node) = self.node(el) else { return };
        // a select only takes one of its own option values
        let accepted = if node.kind() == ControlKind::Select
            && !self.option_values(el).any(|option| option == value)
        {
            String::new()
        } else {
            value.to_owned()
        };

        if let Some(element) = self.element_mut(el) {
            element.value = accepted;
        }
    }

    fn display(&self, el: NodeId) -> Display {
        self.node(el).map(Node::display).unwrap_or_default()
    }

    fn set_display(&mut self, el: NodeId, display: Display) {
        if let Some(element) = self.element_mut(el) {
            element.display = display;
        }
    }

    fn editable_controls(&self, region: NodeId) -> Vec<NodeId> {
        self.descendants(region)
            .into_iter()
            .filter(|id| self.node(*id).is_some_and(|n| n.kind().is_editable()))
            .collect()
    }

    fn locks(&self, el: NodeId) -> Locks {
        self.node(el).map(Node::locks).unwrap_or_default()
    }

    fn clear_locks(&mut self, el: NodeId, locks: Locks) {
        if let Some(element) = self.element_mut(el) {
            element.locks.remove(locks);
        }
    }

    fn has_class(&self, el: NodeId, class: &str) -> bool {
        self.node(el).is_some_and(|n| n.classes().iter().any(|c| c == class))
    }

    fn remove_class(&mut self, el: NodeId, class: &str) {
        if let Some(element) = self.element_mut(el) {
            element.classes.retain(|c| c != class);
        }
    }
}
