//! The scene graph.

use crate::attr::AttrValue;
use crate::node::{Node, NodeId};
use std::collections::HashMap;

/// A tree of scene nodes with an id lookup table.
///
/// The root is always an `svg` node. New nodes attach under the root by
/// default; `add_node_with` places them under any existing parent. Nodes
/// are arena-allocated, so a parent always precedes its children and the
/// tree cannot contain cycles.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    root: NodeId,
    lookup: HashMap<String, NodeId>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// A graph whose root spans the unit square.
    pub fn new() -> Self {
        Self::with_root_attrs(vec![
            ("viewBox".to_string(), AttrValue::from("0 0 1 1")),
            (
                "preserveAspectRatio".to_string(),
                AttrValue::from("xMidYMid meet"),
            ),
        ])
    }

    /// A graph with explicit root attributes.
    pub fn with_root_attrs(attrs: Vec<(String, AttrValue)>) -> Self {
        let root = NodeId::new(0);
        let mut lookup = HashMap::new();
        lookup.insert("root".to_string(), root);
        Self {
            nodes: vec![Node::new("svg", attrs, Some("root".to_string()), None)],
            root,
            lookup,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists.
        false
    }

    /// Add a node under the root.
    pub fn add_node(&mut self, kind: &str, attrs: Vec<(String, AttrValue)>) -> NodeId {
        self.add_node_with(kind, attrs, None, self.root)
    }

    /// Add a node with an optional lookup id under an explicit parent.
    pub fn add_node_with(
        &mut self,
        kind: &str,
        attrs: Vec<(String, AttrValue)>,
        id: Option<&str>,
        parent: NodeId,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(Node::new(kind, attrs, id.map(str::to_string), Some(parent)));
        self.nodes[parent.index()].push_child(node_id);
        if let Some(id) = id {
            self.lookup.insert(id.to_string(), node_id);
        }
        node_id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Resolve a registered string id.
    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.lookup.get(id).copied()
    }

    /// Visit every node in pre-order: node first, then children in
    /// insertion order.
    pub fn traverse<F: FnMut(&Node)>(&self, mut visit: F) {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            visit(node);
            for &child in node.children().iter().rev() {
                stack.push(child);
            }
        }
    }
}
