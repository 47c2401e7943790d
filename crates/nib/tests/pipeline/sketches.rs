//! Structural checks on the rendered documents.

use crate::{seed_query, session_for};
use nib::ParamValue;

#[test]
fn demo_renders_a_single_background_rect() {
    let mut session = session_for("demo");
    session.init_from_query(&seed_query("5a"));
    let graph = session.graph().unwrap();
    assert_eq!(graph.len(), 2);
    let svg = session.svg();
    assert_eq!(svg.matches("<rect").count(), 1);
}

#[test]
fn gradient_document_references_its_defs() {
    let mut session = session_for("gradient");
    session.init_from_query(&seed_query("5a"));
    let svg = session.svg();
    assert!(svg.contains("<defs>"));
    assert!(svg.contains("<linearGradient"));
    assert!(svg.contains("fill=\"url(#grad)\""));
}

#[test]
fn gradient_param_switches_to_radial() {
    let mut session = session_for("gradient");
    session.init_from_query(&seed_query("5a"));
    session.set_param("gradient", ParamValue::from("radial"));
    session.redraw();
    assert!(session.svg().contains("<radialGradient"));
}

#[test]
fn circle_packing_emits_circles_inside_the_unit_container() {
    let mut session = session_for("circle-packing");
    session.init_from_query(&seed_query("5a"));
    session.set_param("max_attempts", ParamValue::Number(500.0));
    session.set_param("container_radius", ParamValue::Number(0.5));
    session.redraw();

    let graph = session.graph().unwrap();
    let mut circles = 0;
    graph.traverse(|node| {
        if node.kind() != "circle" {
            return;
        }
        circles += 1;
        let cx: f64 = node.attr("cx").unwrap().to_string().parse().unwrap();
        let cy: f64 = node.attr("cy").unwrap().to_string().parse().unwrap();
        let r: f64 = node.attr("r").unwrap().to_string().parse().unwrap();
        let d = ((cx - 0.5).powi(2) + (cy - 0.5).powi(2)).sqrt();
        assert!(d + r <= 0.5 + 1e-9);
    });
    assert!(circles > 0);
}

#[test]
fn isometric_cubes_embeds_patterns_and_polygons() {
    let mut session = session_for("isometric-cubes");
    session.init_from_query(&seed_query("5a"));
    let svg = session.svg();
    assert!(svg.contains("<pattern"));
    assert!(svg.contains("<polygon"));
}

#[test]
fn palette_strips_covers_the_canvas() {
    let mut session = session_for("palette-strips");
    session.init_from_query(&seed_query("5a"));
    let graph = session.graph().unwrap();

    let mut area = 0.0;
    graph.traverse(|node| {
        if node.kind() != "rect" {
            return;
        }
        let w: f64 = node.attr("width").unwrap().to_string().parse().unwrap();
        let h: f64 = node.attr("height").unwrap().to_string().parse().unwrap();
        area += w * h;
    });
    assert!((area - 1.0).abs() < 1e-9);
}
