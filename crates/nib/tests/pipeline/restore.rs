//! Shareable query strings and history restoration.

use crate::{seed_query, session_for};
use nib::ParamValue;
use std::time::{Duration, Instant};

#[test]
fn exported_query_restores_the_exact_render() {
    let mut first = session_for("circle-packing");
    first.init_from_query(&seed_query("42"));
    first.set_param("max_attempts", ParamValue::Number(300.0));
    first.redraw();

    let mut second = session_for("circle-packing");
    second.init_from_query(&first.export_query());

    assert_eq!(second.params().number("max_attempts"), Some(300.0));
    assert_eq!(first.svg(), second.svg());
}

#[test]
fn history_walk_replays_previous_seeds() {
    let mut session = session_for("gradient");
    session.init_from_query(&seed_query("42"));
    let first = session.svg().to_string();
    session.new_seed();
    let second = session.svg().to_string();
    session.new_seed();

    assert!(session.back());
    assert_eq!(session.svg(), second);
    assert!(session.back());
    assert_eq!(session.svg(), first);
    assert!(!session.back());
    assert!(session.forward());
    assert_eq!(session.svg(), second);
}

#[test]
fn malformed_query_still_renders_defaults() {
    let mut session = session_for("demo");
    session.init_from_query("seed=xyz&state=%7Bbroken");
    assert!(!session.svg().is_empty());
    // Neither key applied, both logged and dropped.
    assert_eq!(session.params().text("palette"), Some("000"));
}

#[test]
fn hostile_snapshot_values_still_render() {
    // Well-formed JSON with out-of-range values must not block the first
    // render; seed=...&state={"n_colors":0,"max_attempts":200}.
    let mut session = session_for("circle-packing");
    let query = format!(
        "{}&state=%7B%22n_colors%22%3A0%2C%22max_attempts%22%3A200%7D",
        seed_query("42")
    );
    session.init_from_query(&query);
    assert!(!session.svg().is_empty());
    assert_eq!(session.params().number("n_colors"), Some(0.0));
}

#[test]
fn slider_edits_debounce_into_one_redraw() {
    let mut session = session_for("circle-packing");
    session.init_from_query(&seed_query("42"));
    let before = session.svg().to_string();

    let t0 = Instant::now();
    for (i, attempts) in [50.0, 100.0, 150.0].iter().enumerate() {
        session.set_param("max_attempts", ParamValue::Number(*attempts));
        session.on_control_change("max_attempts", t0 + Duration::from_millis(i as u64 * 10));
    }
    assert_eq!(session.svg(), before);
    assert!(session.tick(t0 + Duration::from_secs(2)));
    assert_ne!(session.svg(), before);
    assert!(!session.tick(t0 + Duration::from_secs(3)));
}

#[test]
fn save_writes_a_seed_named_svg() {
    let mut session = session_for("demo");
    session.init_from_query(&seed_query("42"));

    let dir = std::env::temp_dir();
    let path = session.save_to(&dir).unwrap();
    assert_eq!(
        path.extension().and_then(|e| e.to_str()),
        Some("svg")
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, session.svg());
    let _ = std::fs::remove_file(path);
}
