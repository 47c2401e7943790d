//! Render sink trait and the scene walk.

use crate::graph::SceneGraph;
use crate::node::NodeId;

/// An output surface for a scene graph.
///
/// Implement this trait to materialize scenes onto your target (an SVG
/// string, a DOM-like structure, a recording test double). The walk calls:
///
/// - `open_root` once, for the implicit `svg` root, which the sink is
///   expected to already own rather than re-create
/// - `open`/`close` in matched pairs for every other node
/// - `attr` after each open, once per attribute, in insertion order
pub trait RenderSink {
    /// The implicit root element. Called exactly once, first.
    fn open_root(&mut self);

    /// Open a child element.
    fn open(&mut self, kind: &str);

    /// Attach an attribute to the most recently opened element.
    fn attr(&mut self, key: &str, value: &str);

    /// Close the most recently opened element.
    fn close(&mut self, kind: &str);
}

/// Walk `graph` depth-first and materialize it onto `sink`.
///
/// Each draw hands the sink a complete document; there is no diffing
/// against previous output.
pub fn render<S: RenderSink>(graph: &SceneGraph, sink: &mut S) {
    render_node(graph, graph.root(), sink, true);
}

fn render_node<S: RenderSink>(graph: &SceneGraph, id: NodeId, sink: &mut S, is_root: bool) {
    let node = graph.node(id);
    if is_root {
        sink.open_root();
    } else {
        sink.open(node.kind());
    }
    for (key, value) in node.attrs() {
        sink.attr(key, &value.to_string());
    }
    for &child in node.children() {
        render_node(graph, child, sink, false);
    }
    if !is_root {
        sink.close(node.kind());
    }
}
