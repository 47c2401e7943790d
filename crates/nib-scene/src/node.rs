//! Scene nodes.

use crate::attr::AttrValue;
use smallvec::SmallVec;

/// Index of a node within its [`SceneGraph`](crate::SceneGraph) arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single scene node: an element name, ordered attributes, an optional
/// string id and tree links.
///
/// The parent link is navigational only; the arena owns every node and
/// ownership flows root to children.
#[derive(Clone, Debug)]
pub struct Node {
    kind: String,
    attrs: Vec<(String, AttrValue)>,
    id: Option<String>,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new(
        kind: &str,
        attrs: Vec<(String, AttrValue)>,
        id: Option<String>,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            attrs,
            id,
            parent,
            children: SmallVec::new(),
        }
    }

    /// Element name, e.g. `circle` or `rect`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> &[(String, AttrValue)] {
        &self.attrs
    }

    /// Look up a single attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set an attribute, replacing an existing key in place.
    pub fn set_attr(&mut self, key: &str, value: AttrValue) {
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    /// Lookup id, if the node was registered with one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}
