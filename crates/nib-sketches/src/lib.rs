//! # nib-sketches - The standard generative sketches
//!
//! Each sketch is a pure transform from parameters and a seeded generator
//! to a scene graph; this crate also owns the shared palette table.

mod circle_packing;
mod demo;
mod gradient;
mod isometric_cubes;
mod palette_strips;
pub mod palettes;

pub use circle_packing::CirclePacking;
pub use demo::Demo;
pub use gradient::Gradient;
pub use isometric_cubes::IsometricCubes;
pub use palette_strips::PaletteStrips;

use nib_session::{Binding, SketchRegistry};

/// Register every built-in sketch.
pub fn register_standard_sketches(registry: &mut SketchRegistry) {
    registry.register(Box::new(Demo));
    registry.register(Box::new(PaletteStrips));
    registry.register(Box::new(Gradient));
    registry.register(Box::new(IsometricCubes));
    registry.register(Box::new(CirclePacking));
}

/// Pane binding for the shared `palette` parameter.
pub fn palette_binding() -> Binding {
    Binding::options(palettes::palette_options()).with_label("Palette")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_is_complete() {
        let mut registry = SketchRegistry::new();
        register_standard_sketches(&mut registry);
        for name in [
            "demo",
            "palette-strips",
            "gradient",
            "isometric-cubes",
            "circle-packing",
        ] {
            assert!(registry.get(name).is_some(), "{name}");
        }
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn palette_binding_lists_every_palette() {
        let binding = palette_binding();
        assert_eq!(binding.options.len(), palettes::palette_names().count());
        assert!(!binding.is_slider());
    }
}
