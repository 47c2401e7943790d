//! Command-line sketch renderer.
//!
//! Usage:
//!   nib <sketch>              Render with a fresh seed
//!   nib <sketch> --seed HEX   Render a specific seed
//!   nib --list                List available sketches

use std::{env, path::PathBuf, process::ExitCode};

use nib::{
    palette_binding, register_standard_sketches, ParamValue, Seed, Session, SessionConfig,
    SessionError, SketchRegistry,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: nib [OPTIONS] <SKETCH>

Arguments:
  <SKETCH>  Sketch name (see --list)

Options:
  --seed <HEX>       64-digit hex seed, with or without a 0x prefix
  --query <STRING>   Shareable query string (seed=...&state=...)
  --set <KEY=VALUE>  Override one parameter; repeatable
  --out <DIR>        Directory for the rendered SVG (default: .)
  --new-seeds <N>    Render N additional fresh seeds
  --list             List available sketches
  -h, --help         Print this help message";

struct Options {
    sketch: String,
    seed: Option<Seed>,
    query: Option<String>,
    overrides: Vec<(String, ParamValue)>,
    out: PathBuf,
    new_seeds: u32,
}

enum Action {
    Run(Options),
    List,
    Help,
}

fn parse_value(raw: &str) -> ParamValue {
    match raw {
        "true" => ParamValue::Toggle(true),
        "false" => ParamValue::Toggle(false),
        _ => match raw.parse::<f64>() {
            Ok(n) => ParamValue::Number(n),
            Err(_) => ParamValue::Text(raw.to_string()),
        },
    }
}

fn parse_args() -> Result<Action, String> {
    let mut args = env::args().skip(1);
    let mut sketch = None;
    let mut seed = None;
    let mut query = None;
    let mut overrides = Vec::new();
    let mut out = PathBuf::from(".");
    let mut new_seeds = 0;

    fn value_of(
        flag: &str,
        args: &mut dyn Iterator<Item = String>,
    ) -> Result<String, String> {
        args.next().ok_or_else(|| format!("{flag} needs a value"))
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "--list" => return Ok(Action::List),
            "--seed" => {
                let raw = value_of("--seed", &mut args)?;
                seed = Some(Seed::parse(&raw).map_err(|e| format!("invalid seed: {e}"))?);
            }
            "--query" => query = Some(value_of("--query", &mut args)?),
            "--set" => {
                let raw = value_of("--set", &mut args)?;
                let (key, value) = raw
                    .split_once('=')
                    .ok_or_else(|| format!("--set expects KEY=VALUE, got {raw}"))?;
                overrides.push((key.to_string(), parse_value(value)));
            }
            "--out" => out = PathBuf::from(value_of("--out", &mut args)?),
            "--new-seeds" => {
                let raw = value_of("--new-seeds", &mut args)?;
                new_seeds = raw
                    .parse()
                    .map_err(|_| format!("--new-seeds expects a number, got {raw}"))?;
            }
            _ if arg.starts_with('-') => return Err(format!("unknown option {arg}\n\n{USAGE}")),
            _ if sketch.is_none() => sketch = Some(arg),
            _ => return Err(USAGE.into()),
        }
    }

    match sketch {
        Some(sketch) => Ok(Action::Run(Options {
            sketch,
            seed,
            query,
            overrides,
            out,
            new_seeds,
        })),
        None => Err(USAGE.into()),
    }
}

fn run(options: Options) -> Result<(), SessionError> {
    let mut registry = SketchRegistry::new();
    register_standard_sketches(&mut registry);

    let sketch = registry
        .remove(&options.sketch)
        .ok_or_else(|| SessionError::UnknownSketch(options.sketch.clone()))?;

    let mut session = Session::new(sketch, SessionConfig::default());
    session.set_binding("palette", palette_binding());

    let mut query = options.query.unwrap_or_default();
    if let Some(seed) = &options.seed {
        // A later pair wins during parsing, so an explicit --seed overrides
        // any seed inside --query.
        query.push_str(&format!("&seed={seed}"));
    }
    session.init_from_query(&query);

    if !options.overrides.is_empty() {
        for (key, value) in options.overrides {
            session.set_param(&key, value);
        }
        session.redraw();
    }

    let path = session.save_to(&options.out)?;
    println!("{}", path.display());
    println!("?{}", session.export_query());

    for _ in 0..options.new_seeds {
        session.new_seed();
        let path = session.save_to(&options.out)?;
        println!("{}", path.display());
        println!("?{}", session.export_query());
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match parse_args() {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::List) => {
            let mut registry = SketchRegistry::new();
            register_standard_sketches(&mut registry);
            for name in registry.names() {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
        Ok(Action::Run(options)) => match run(options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
