//! Shuffled-palette gradient fill.

use crate::palettes::palette_or_default;
use nib_core::Xorshift;
use nib_scene::{attrs, SceneGraph};
use nib_session::{Binding, Bindings, Params, Sketch};

pub struct Gradient;

impl Sketch for Gradient {
    fn name(&self) -> &str {
        "gradient"
    }

    fn default_params(&self) -> Params {
        let mut params = Params::new();
        params.set("gradient", "linear".into());
        params
    }

    fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.set(
            "gradient",
            Binding::options([("linear", "linear"), ("radial", "radial")]),
        );
        bindings
    }

    fn draw(&self, params: &Params, rng: &mut Xorshift) -> SceneGraph {
        let mut colors: Vec<&str> =
            palette_or_default(params.text("palette").unwrap_or_default()).to_vec();
        rng.shuffle(&mut colors);

        let kind = match params.text("gradient") {
            Some("radial") => "radialGradient",
            _ => "linearGradient",
        };

        let mut graph = SceneGraph::new();
        let defs = graph.add_node("defs", attrs! {});
        let gradient = graph.add_node_with(
            kind,
            attrs! { "id" => "grad", "x1" => 0.0, "x2" => 1.0, "y1" => 0.0, "y2" => 1.0 },
            Some("grad"),
            defs,
        );

        let count = colors.len() as f64;
        for (i, color) in colors.iter().enumerate() {
            graph.add_node_with(
                "stop",
                attrs! {
                    "offset" => (i as f64 + 1.0) / count,
                    "stop-color" => *color,
                },
                None,
                gradient,
            );
        }

        graph.add_node(
            "rect",
            attrs! { "width" => 1.0, "height" => 1.0, "fill" => "url(#grad)" },
        );
        graph
    }
}
