//! # nib-session - The sketch driver
//!
//! This crate provides the [`Session`] struct, which is the main entry
//! point for:
//! - Owning the parameter map, seed and panel for one sketch session
//! - Restoring state from shareable query strings
//! - Recording history entries so back/forward reproduces exact renders
//! - Debouncing slider-driven redraws
//! - Writing the current render to an SVG file
//!
//! # Quick Start
//!
//! ```no_run
//! use nib_session::{Session, SessionConfig, SketchRegistry};
//!
//! let mut registry = SketchRegistry::new();
//! // ... register sketches ...
//! let sketch = registry.remove("demo").expect("registered");
//! let mut session = Session::new(sketch, SessionConfig::default());
//! session.init_from_query("");
//! println!("{}", session.svg());
//! ```
//!
//! All formerly ambient state (current panel, current seed, the restore
//! re-entrancy flag) lives in the session object; nothing is process-wide.

mod debounce;
mod error;
mod history;
mod pane;
mod params;
mod query;
mod shortcuts;
mod sketch;

pub use debounce::Debouncer;
pub use error::{SessionError, StateError};
pub use history::{History, HistoryEntry};
pub use pane::{BasicPane, Pane};
pub use params::{Binding, Bindings, ParamValue, Params};
pub use query::QueryState;
pub use shortcuts::Action;
pub use sketch::{Sketch, SketchRegistry};

use nib_core::{Seed, Xorshift};
use nib_scene::{write_svg, SceneGraph};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Parameter names the driver injects into every sketch.
pub const PARAM_PALETTE: &str = "palette";
pub const PARAM_BACKGROUND: &str = "background";
pub const PARAM_DRAW_ON_CHANGE: &str = "draw_on_change";

/// Session configuration options.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Quiet period for slider-driven redraws.
    pub debounce_delay: Duration,
    /// Initial value of the `draw_on_change` parameter.
    pub auto_redraw: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_millis(500),
            auto_redraw: true,
        }
    }
}

/// Observable driver phase.
///
/// Every operation passes through `Restoring` and/or `Drawing` and returns
/// the session to `Idle` before it returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Restoring,
    Drawing,
}

/// One sketch session: parameters, seed, panel, history and the last
/// rendered document.
pub struct Session {
    sketch: Box<dyn Sketch>,
    params: Params,
    bindings: Bindings,
    pane: Box<dyn Pane>,
    seed: Seed,
    rng: Xorshift,
    history: History,
    debounce: Debouncer,
    phase: Phase,
    restoring: bool,
    graph: Option<SceneGraph>,
    svg: String,
    config: SessionConfig,
}

impl Session {
    /// Create a session for one sketch with a freshly generated seed.
    pub fn new(sketch: Box<dyn Sketch>, config: SessionConfig) -> Self {
        Self::with_pane(sketch, Box::new(BasicPane::new()), config)
    }

    /// Create a session with an explicit panel implementation.
    pub fn with_pane(sketch: Box<dyn Sketch>, pane: Box<dyn Pane>, config: SessionConfig) -> Self {
        let mut params = driver_default_params(config.auto_redraw);
        params.merge(&sketch.default_params());
        let mut bindings = driver_default_bindings();
        bindings.merge(&sketch.bindings());

        let seed = Seed::generate(&mut rand::thread_rng());
        let rng = Xorshift::from_seed(&seed);
        let debounce = Debouncer::new(config.debounce_delay);

        Self {
            sketch,
            params,
            bindings,
            pane,
            seed,
            rng,
            history: History::new(),
            debounce,
            phase: Phase::Idle,
            restoring: false,
            graph: None,
            svg: String::new(),
            config,
        }
    }

    /// Initial load: apply a query string and draw.
    ///
    /// A malformed `state` payload is warned about and ignored; a missing
    /// seed keeps the generated one. Never fails, never blocks the first
    /// render.
    pub fn init_from_query(&mut self, query: &str) {
        let parsed = QueryState::parse(query);
        if let Some(state) = &parsed.state {
            self.import_pane_state(state);
        }
        if let Some(seed) = parsed.seed {
            self.seed = seed;
        }
        self.draw();
        let entry = self.snapshot_entry();
        self.history.replace(entry);
    }

    /// Re-run the sketch for the current seed and parameters.
    ///
    /// Reseeds the generator first, so the same seed and parameters always
    /// produce the same document. Replaces all prior output.
    pub fn redraw(&mut self) {
        self.draw();
    }

    /// Generate a fresh seed, redraw, and record a history entry.
    pub fn new_seed(&mut self) {
        self.seed = Seed::generate(&mut rand::thread_rng());
        self.draw();
        let entry = self.snapshot_entry();
        self.history.push(entry);
        debug!(seed = %self.seed, "new seed");
    }

    /// Navigate back, restoring the previous seed and panel state.
    ///
    /// Returns false when already at the oldest entry or when a restore is
    /// in progress.
    pub fn back(&mut self) -> bool {
        self.navigate(|history| history.back().cloned())
    }

    /// Navigate forward. The mirror of [`Session::back`].
    pub fn forward(&mut self) -> bool {
        self.navigate(|history| history.forward().cloned())
    }

    fn navigate<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut History) -> Option<HistoryEntry>,
    {
        if self.restoring {
            return false;
        }
        self.restoring = true;
        self.phase = Phase::Restoring;

        let restored = match step(&mut self.history) {
            Some(entry) => {
                self.import_pane_state(&entry.pane_state);
                self.seed = entry.seed;
                self.draw();
                true
            }
            None => false,
        };

        self.phase = Phase::Idle;
        self.restoring = false;
        restored
    }

    /// Restore from a query string, used when no history entry is
    /// available for a navigation. Guarded like [`Session::back`].
    pub fn restore_from_query(&mut self, query: &str) -> bool {
        if self.restoring {
            return false;
        }
        self.restoring = true;
        self.phase = Phase::Restoring;

        let parsed = QueryState::parse(query);
        if let Some(state) = &parsed.state {
            self.import_pane_state(state);
        }
        if let Some(seed) = parsed.seed {
            self.seed = seed;
        }
        self.draw();

        self.phase = Phase::Idle;
        self.restoring = false;
        true
    }

    /// A panel control changed.
    ///
    /// Sliders with auto-redraw enabled are debounced; other controls
    /// redraw immediately. With auto-redraw off the redraw is deferred
    /// indefinitely, but the history entry is still recorded so the
    /// current query string stays shareable.
    pub fn on_control_change(&mut self, name: &str, now: Instant) {
        let auto = self
            .params
            .toggle(PARAM_DRAW_ON_CHANGE)
            .unwrap_or(true);
        let slider = self
            .bindings
            .get(name)
            .map(Binding::is_slider)
            .unwrap_or(false);

        if auto && slider {
            self.debounce.poke(now);
            return;
        }
        if auto {
            self.draw();
        }
        let entry = self.snapshot_entry();
        self.history.push(entry);
    }

    /// Fire any due debounced redraw. Returns true if a draw happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        self.draw();
        let entry = self.snapshot_entry();
        self.history.push(entry);
        true
    }

    /// Dispatch a keyboard shortcut. `Save` and `Home` are returned for
    /// the caller to handle; `NewSeed` is applied directly.
    pub fn handle_key(&mut self, key: char) -> Option<Action> {
        let action = Action::for_key(key)?;
        if action == Action::NewSeed {
            self.new_seed();
        }
        Some(action)
    }

    /// Set a parameter programmatically and refresh the panel.
    pub fn set_param(&mut self, name: &str, value: ParamValue) {
        self.params.set(name, value);
        self.pane.refresh(&self.params);
    }

    /// Attach or replace a control descriptor.
    pub fn set_binding(&mut self, name: &str, binding: Binding) {
        self.bindings.set(name, binding);
    }

    /// The current seed and panel state as a shareable query string.
    pub fn export_query(&self) -> String {
        let state = self.pane.export_state(&self.params);
        QueryState::to_query_string(&self.seed, Some(&state))
    }

    /// Write the current render to `<seed>.svg` under `dir`.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, SessionError> {
        let path = dir.join(format!("{}.svg", self.seed));
        fs::write(&path, &self.svg).map_err(|source| SessionError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The last rendered document. Empty until the first draw.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// The last built scene graph.
    pub fn graph(&self) -> Option<&SceneGraph> {
        self.graph.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn draw(&mut self) {
        self.phase = Phase::Drawing;
        self.rng.reseed(&self.seed);
        let graph = self.sketch.draw(&self.params, &mut self.rng);
        self.svg = write_svg(&graph);
        self.graph = Some(graph);
        self.phase = Phase::Idle;
        debug!(seed = %self.seed, nodes = self.graph.as_ref().map(SceneGraph::len), "drew scene");
    }

    fn snapshot_entry(&self) -> HistoryEntry {
        HistoryEntry {
            seed: self.seed.clone(),
            pane_state: self.pane.export_state(&self.params),
        }
    }

    fn import_pane_state(&mut self, state: &serde_json::Value) {
        if let Err(e) = self.pane.import_state(&mut self.params, state) {
            warn!(error = %e, "failed to apply state snapshot, keeping current parameters");
        }
    }
}

fn driver_default_params(auto_redraw: bool) -> Params {
    let mut params = Params::new();
    params.set(PARAM_PALETTE, ParamValue::from("000"));
    params.set(PARAM_BACKGROUND, ParamValue::from("white"));
    params.set(PARAM_DRAW_ON_CHANGE, ParamValue::from(auto_redraw));
    params
}

fn driver_default_bindings() -> Bindings {
    let mut bindings = Bindings::new();
    bindings.set(
        PARAM_BACKGROUND,
        Binding::options([
            ("white", "white"),
            ("black", "black"),
            ("grey", "grey"),
            ("darkgrey", "darkgrey"),
            ("ivory", "ivory"),
            ("linen", "linen"),
        ])
        .with_label("Background"),
    );
    bindings.set(
        PARAM_DRAW_ON_CHANGE,
        Binding::default().with_label("Automatic redraw"),
    );
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use nib_scene::attrs;

    const HEX: &str = "0123456789abcdeffedcba98765432100123456789abcdeffedcba9876543210";

    /// A sketch that consumes randomness and reflects one parameter, so
    /// the output depends on both seed and params.
    struct Probe;

    impl Sketch for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn default_params(&self) -> Params {
            let mut params = Params::new();
            params.set("count", ParamValue::from(3.0));
            params
        }

        fn bindings(&self) -> Bindings {
            let mut bindings = Bindings::new();
            bindings.set("count", Binding::slider(1.0, 10.0, 1.0));
            bindings
        }

        fn draw(&self, params: &Params, rng: &mut Xorshift) -> SceneGraph {
            let mut graph = SceneGraph::new();
            let count = params.number("count").unwrap_or(0.0) as usize;
            for _ in 0..count {
                let (x, y) = rng.vec2();
                graph.add_node("circle", attrs! { "cx" => x, "cy" => y, "r" => 0.1 });
            }
            graph
        }
    }

    fn session() -> Session {
        Session::new(Box::new(Probe), SessionConfig::default())
    }

    #[test]
    fn driver_defaults_are_merged() {
        let session = session();
        assert_eq!(session.params().text(PARAM_PALETTE), Some("000"));
        assert_eq!(session.params().toggle(PARAM_DRAW_ON_CHANGE), Some(true));
        assert_eq!(session.params().number("count"), Some(3.0));
    }

    #[test]
    fn init_with_explicit_seed_is_deterministic() {
        let query = format!("seed=0x{HEX}");
        let mut a = session();
        let mut b = session();
        a.init_from_query(&query);
        b.init_from_query(&query);
        assert_eq!(a.svg(), b.svg());
        assert!(!a.svg().is_empty());
        assert_eq!(a.seed().digits(), HEX);
    }

    #[test]
    fn malformed_state_falls_back_to_defaults() {
        let mut session = session();
        session.init_from_query("state=not-json");
        assert_eq!(session.params().number("count"), Some(3.0));
        assert!(!session.svg().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn state_from_query_is_applied() {
        let mut session = session();
        session.init_from_query("state=%7B%22count%22%3A5%7D");
        assert_eq!(session.params().number("count"), Some(5.0));
    }

    #[test]
    fn new_seed_changes_output_and_records_history() {
        let mut session = session();
        session.init_from_query(&format!("seed=0x{HEX}"));
        let before = session.svg().to_string();
        session.new_seed();
        assert_ne!(session.svg(), before);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn back_restores_the_exact_prior_render() {
        let mut session = session();
        session.init_from_query(&format!("seed=0x{HEX}"));
        let first = session.svg().to_string();
        session.new_seed();
        assert!(session.back());
        assert_eq!(session.svg(), first);
        assert!(session.forward());
        assert_ne!(session.svg(), first);
    }

    #[test]
    fn back_at_oldest_entry_is_a_no_op() {
        let mut session = session();
        session.init_from_query("");
        let svg = session.svg().to_string();
        assert!(!session.back());
        assert_eq!(session.svg(), svg);
    }

    #[test]
    fn slider_change_is_debounced() {
        let mut session = session();
        session.init_from_query(&format!("seed=0x{HEX}"));
        let before = session.svg().to_string();

        let t0 = Instant::now();
        session.set_param("count", ParamValue::from(6.0));
        session.on_control_change("count", t0);
        // Inside the quiet window nothing redraws.
        assert_eq!(session.svg(), before);
        assert!(!session.tick(t0 + Duration::from_millis(100)));
        // After the window the redraw fires exactly once.
        assert!(session.tick(t0 + Duration::from_secs(1)));
        assert_ne!(session.svg(), before);
        assert!(!session.tick(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn non_slider_change_redraws_immediately() {
        let mut session = session();
        session.init_from_query(&format!("seed=0x{HEX}"));
        session.set_param(PARAM_BACKGROUND, ParamValue::from("black"));
        let entries = session.history().len();
        session.on_control_change(PARAM_BACKGROUND, Instant::now());
        assert_eq!(session.history().len(), entries + 1);
    }

    #[test]
    fn auto_redraw_off_defers_but_still_records() {
        let mut session = session();
        session.init_from_query(&format!("seed=0x{HEX}"));
        session.set_param(PARAM_DRAW_ON_CHANGE, ParamValue::from(false));
        let before = session.svg().to_string();

        session.set_param("count", ParamValue::from(9.0));
        session.on_control_change(PARAM_BACKGROUND, Instant::now());
        assert_eq!(session.svg(), before);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn query_roundtrip_reproduces_the_render() {
        let mut a = session();
        a.init_from_query(&format!("seed=0x{HEX}"));
        a.set_param("count", ParamValue::from(7.0));
        a.redraw();
        let query = a.export_query();

        let mut b = session();
        b.init_from_query(&query);
        assert_eq!(a.svg(), b.svg());
    }

    #[test]
    fn handle_key_dispatches() {
        let mut session = session();
        session.init_from_query("");
        let before = session.seed().clone();
        assert_eq!(session.handle_key('n'), Some(Action::NewSeed));
        assert_ne!(session.seed(), &before);
        assert_eq!(session.handle_key('s'), Some(Action::Save));
        assert_eq!(session.handle_key('q'), None);
    }

    #[test]
    fn save_writes_seed_named_file() {
        let mut session = session();
        session.init_from_query(&format!("seed=0x{HEX}"));
        let dir = std::env::temp_dir();
        let path = session.save_to(&dir).unwrap();
        assert!(path.file_name().is_some());
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(format!("0x{HEX}.svg").as_str())
        );
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.svg());
        let _ = fs::remove_file(path);
    }
}
