//! # nib - Seeded generative sketches rendered to SVG
//!
//! A sketch is a pure function from parameters and a seeded generator to a
//! scene graph; the driver owns everything around it: seeds, shareable
//! query strings, history and debounced redraws.
//!
//! ```
//! use nib::{register_standard_sketches, Session, SessionConfig, SketchRegistry};
//!
//! let mut registry = SketchRegistry::new();
//! register_standard_sketches(&mut registry);
//! let sketch = registry.remove("demo").unwrap();
//!
//! let mut session = Session::new(sketch, SessionConfig::default());
//! session.init_from_query("");
//! assert!(session.svg().contains("<svg xmlns="));
//! ```
//!
//! The same seed always reproduces the same document:
//!
//! ```
//! use nib::{register_standard_sketches, Session, SessionConfig, SketchRegistry};
//!
//! let draw = |query: &str| {
//!     let mut registry = SketchRegistry::new();
//!     register_standard_sketches(&mut registry);
//!     let mut session = Session::new(registry.remove("demo").unwrap(), SessionConfig::default());
//!     session.init_from_query(query);
//!     session.svg().to_string()
//! };
//! let query = format!("seed=0x{}", "4b".repeat(32));
//! assert_eq!(draw(&query), draw(&query));
//! ```

pub use nib_core::{math, Seed, SeedError, Xorshift};
pub use nib_scene::{attrs, render, write_svg, AttrValue, Node, NodeId, RenderSink, SceneGraph, SvgWriter};
pub use nib_session::{
    Action, BasicPane, Binding, Bindings, Debouncer, History, HistoryEntry, Pane, ParamValue,
    Params, Phase, QueryState, Session, SessionConfig, SessionError, Sketch, SketchRegistry,
    StateError,
};
pub use nib_sketches::{palette_binding, palettes, register_standard_sketches};
