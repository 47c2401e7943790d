//! The sketch seam and registry.

use crate::params::{Bindings, Params};
use nib_core::Xorshift;
use nib_scene::SceneGraph;

/// A generative algorithm: a pure transform from parameters (and a seeded
/// generator) to a scene graph.
///
/// Sketches never touch the output surface or the driver; new algorithms
/// plug in without changing either.
pub trait Sketch {
    /// Registry name, also used on the command line.
    fn name(&self) -> &str;

    /// Parameters this sketch adds on top of the driver defaults.
    fn default_params(&self) -> Params;

    /// Control descriptors for the sketch's parameters.
    fn bindings(&self) -> Bindings {
        Bindings::new()
    }

    /// Build the scene for the current parameters.
    fn draw(&self, params: &Params, rng: &mut Xorshift) -> SceneGraph;
}

/// Named collection of available sketches.
#[derive(Default)]
pub struct SketchRegistry {
    sketches: Vec<Box<dyn Sketch>>,
}

impl SketchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sketch. A later registration with the same name wins.
    pub fn register(&mut self, sketch: Box<dyn Sketch>) {
        self.sketches.retain(|s| s.name() != sketch.name());
        self.sketches.push(sketch);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Sketch> {
        self.sketches
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Remove a sketch, transferring ownership to the caller.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Sketch>> {
        let idx = self.sketches.iter().position(|s| s.name() == name)?;
        Some(self.sketches.remove(idx))
    }

    pub fn names(&self) -> Vec<&str> {
        self.sketches.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sketches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sketches.is_empty()
    }
}
