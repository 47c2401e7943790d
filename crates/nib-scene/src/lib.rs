//! # nib-scene - Scene graphs for nib
//!
//! A typed scene graph with SVG serialization.
//!
//! ## Features
//!
//! - **Arena storage**: nodes live in a `Vec`, linked by [`NodeId`]
//!   indices; parent links are navigational, ownership flows root to
//!   children
//! - **Ordered attributes**: attribute insertion order is preserved and
//!   reproduced in the output
//! - **Pre-order traversal**: node before children, children in insertion
//!   order
//! - **Pluggable output**: the [`RenderSink`] trait decouples the walk
//!   from the output surface; [`SvgWriter`] is the standalone-document
//!   implementation
//!
//! Sketches build a [`SceneGraph`] and never touch the output directly;
//! [`render`] replaces the whole document on every draw.

mod attr;
mod graph;
mod node;
mod render;
mod svg;

pub use attr::AttrValue;
pub use graph::SceneGraph;
pub use node::{Node, NodeId};
pub use render::{render, RenderSink};
pub use svg::{write_svg, SvgWriter};
