//! Recursive circle packing by rejection sampling.

use crate::palettes::palette_or_default;
use nib_core::{math, Xorshift};
use nib_scene::{attrs, SceneGraph};
use nib_session::{Binding, Bindings, ParamValue, Params, Sketch};
use std::f64::consts::TAU;

pub struct CirclePacking;

#[derive(Clone, Copy, Debug)]
struct Circle {
    x: f64,
    y: f64,
    radius: f64,
}

/// Pack `container` with non-overlapping circles by rejection sampling.
///
/// Candidates are drawn as polar offsets from the container center and
/// accepted when fully inside the container and clear of every sibling.
/// Each accepted circle is itself packed with halved radius bounds until
/// `max_depth`, with the same attempt budget per level. There is no
/// backtracking; a level simply stops after `max_attempts` candidates.
///
/// Only siblings are tested for overlap: a candidate that clears an
/// accepted circle cannot touch anything nested inside it.
fn pack(
    container: Circle,
    max_attempts: u64,
    min_radius: f64,
    max_radius: f64,
    depth: u32,
    max_depth: u32,
    rng: &mut Xorshift,
) -> Vec<Circle> {
    let mut siblings: Vec<Circle> = Vec::new();
    let mut nested: Vec<Circle> = Vec::new();

    for _ in 0..max_attempts {
        let radius = rng.range(min_radius, max_radius);
        let angle = rng.range_to(TAU);
        let distance = rng.range_to(container.radius - radius);
        let x = container.x + angle.cos() * distance;
        let y = container.y + angle.sin() * distance;

        let inside = math::dist((x, y), (container.x, container.y)) + radius <= container.radius;
        let clear = siblings
            .iter()
            .all(|c| math::dist((x, y), (c.x, c.y)) >= radius + c.radius);

        if inside && clear {
            let accepted = Circle { x, y, radius };
            siblings.push(accepted);
            if depth < max_depth {
                nested.extend(pack(
                    accepted,
                    max_attempts,
                    min_radius / 2.0,
                    (max_radius / 2.0).min(radius / 2.0),
                    depth + 1,
                    max_depth,
                    rng,
                ));
            }
        }
    }

    siblings.extend(nested);
    siblings
}

impl Sketch for CirclePacking {
    fn name(&self) -> &str {
        "circle-packing"
    }

    fn default_params(&self) -> Params {
        let mut params = Params::new();
        params.set("n_colors", 5.0.into());
        params.set("max_attempts", 10_000.0.into());
        params.set("container_radius", 1.0.into());
        params.set("radius", ParamValue::Interval { min: 1e-2, max: 1e-1 });
        // Every accepted circle re-runs the full attempt budget, so the
        // cost grows steeply with depth; one extra level is the default.
        params.set("depth", ParamValue::Interval { min: 0.0, max: 1.0 });
        params
    }

    fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.set("n_colors", Binding::slider(1.0, 10.0, 1.0));
        bindings.set("max_attempts", Binding::slider(1.0, 1e5, 100.0));
        bindings.set("container_radius", Binding::slider(0.1, 2.0, 0.1));
        bindings.set("radius", Binding::slider(1e-5, 1.0, 1e-3));
        bindings.set("depth", Binding::slider(0.0, 10.0, 1.0));
        bindings
    }

    fn draw(&self, params: &Params, rng: &mut Xorshift) -> SceneGraph {
        let full_palette = palette_or_default(params.text("palette").unwrap_or_default());
        // Snapshots restored from a URL can carry any number here; the
        // working palette must keep at least one color.
        let n_colors = (params.number("n_colors").unwrap_or(5.0) as usize).max(1);
        let max_attempts = params.number("max_attempts").unwrap_or(1e4) as u64;
        let container_radius = params.number("container_radius").unwrap_or(1.0);
        let (min_radius, max_radius) = params.interval("radius").unwrap_or((1e-2, 1e-1));
        let (min_depth, max_depth) = params.interval("depth").unwrap_or((0.0, 10.0));

        let mut graph = SceneGraph::new();
        graph.add_node_with(
            "rect",
            attrs! {
                "id" => "rect-0",
                "width" => 1.0,
                "height" => 1.0,
                "fill" => *rng.choice(full_palette),
            },
            Some("background"),
            graph.root(),
        );

        // Narrow the working palette to n random colors (repeats allowed).
        let palette: Vec<&str> = (0..n_colors)
            .map(|_| *rng.choice(full_palette))
            .collect();

        let container = Circle {
            x: 0.5,
            y: 0.5,
            radius: container_radius,
        };
        let circles = pack(
            container,
            max_attempts,
            min_radius,
            max_radius,
            min_depth as u32,
            max_depth as u32,
            rng,
        );

        for (i, c) in circles.iter().enumerate() {
            graph.add_node_with(
                "circle",
                attrs! {
                    "id" => format!("circle-{i}"),
                    "cx" => c.x,
                    "cy" => c.y,
                    "r" => c.radius,
                    "fill" => *rng.choice(&palette),
                    "stroke" => *rng.choice(&palette),
                    "stroke-width" => 0.0,
                },
                None,
                graph.root(),
            );
        }

        graph
    }
}
