//! The smallest possible sketch: one palette-colored background rect.

use crate::palettes::palette_or_default;
use nib_core::Xorshift;
use nib_scene::{attrs, SceneGraph};
use nib_session::{Params, Sketch};

pub struct Demo;

impl Sketch for Demo {
    fn name(&self) -> &str {
        "demo"
    }

    fn default_params(&self) -> Params {
        Params::new()
    }

    fn draw(&self, params: &Params, rng: &mut Xorshift) -> SceneGraph {
        let palette = palette_or_default(params.text("palette").unwrap_or_default());
        let mut graph = SceneGraph::new();
        graph.add_node(
            "rect",
            attrs! {
                "x" => 0.0,
                "y" => 0.0,
                "width" => 1.0,
                "height" => 1.0,
                "fill" => *rng.choice(palette),
            },
        );
        graph
    }
}
