//! End-to-end sketch pipeline tests.
//!
//! These tests verify the complete query → session → scene → SVG path
//! using the standard sketch registry.

use nib::{register_standard_sketches, Session, SessionConfig, SketchRegistry};

mod determinism;
mod restore;
mod sketches;

/// Create a session for one of the standard sketches.
pub fn session_for(name: &str) -> Session {
    let mut registry = SketchRegistry::new();
    register_standard_sketches(&mut registry);
    let sketch = registry
        .remove(name)
        .unwrap_or_else(|| panic!("sketch '{name}' not registered"));
    let mut session = Session::new(sketch, SessionConfig::default());
    session.set_binding("palette", nib::palette_binding());
    session
}

/// Render one sketch for a query string and return the SVG.
pub fn render(name: &str, query: &str) -> String {
    let mut session = session_for(name);
    session.init_from_query(query);
    session.svg().to_string()
}

/// A fixed 64-digit seed built by repeating one hex byte.
pub fn seed_query(byte: &str) -> String {
    format!("seed=0x{}", byte.repeat(32))
}
