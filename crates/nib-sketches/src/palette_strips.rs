//! Palette proof sheet: one row per palette, one cell per color.

use crate::palettes;
use nib_core::Xorshift;
use nib_scene::{attrs, SceneGraph};
use nib_session::{Params, Sketch};

pub struct PaletteStrips;

impl Sketch for PaletteStrips {
    fn name(&self) -> &str {
        "palette-strips"
    }

    fn default_params(&self) -> Params {
        Params::new()
    }

    // No randomness: the proof sheet looks the same for every seed.
    fn draw(&self, _params: &Params, _rng: &mut Xorshift) -> SceneGraph {
        let mut graph = SceneGraph::new();
        let names: Vec<&str> = palettes::palette_names().collect();
        let row_height = 1.0 / names.len() as f64;

        for (i, name) in names.iter().enumerate() {
            let colors = palettes::palette_or_default(name);
            let cell_width = 1.0 / colors.len() as f64;
            for (j, color) in colors.iter().enumerate() {
                graph.add_node(
                    "rect",
                    attrs! {
                        "x" => j as f64 * cell_width,
                        "y" => i as f64 * row_height,
                        "width" => cell_width,
                        "height" => row_height,
                        "fill" => *color,
                    },
                );
            }
        }
        graph
    }
}
