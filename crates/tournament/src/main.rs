//! Tournament CLI
//!
//! Run round-robin tournaments between Isolation agents.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tournament::{run_tournament, TournamentConfig, TournamentResults};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Isolation Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament run [config.toml] [--matches N] [--seed S] [--out results.json]");
    println!("  tournament report <results.json>");
    println!("  tournament sample-config");
    println!();
    println!("Without a config file the default roster is used:");
    println!("  ID_Improved and Student against Random, MM_* and AB_* opponents");
    println!();
    println!("Set RUST_LOG=debug to log every game.");
    println!();
    println!("Examples:");
    println!("  tournament run configs/tournament.toml --matches 10");
    println!("  tournament run --seed 7 --out results.json");
}

/// Parse the value following a flag
fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i + 1)
        .with_context(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid value for {flag}: {raw}"))
}

fn run(args: &[String]) -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut matches: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut out: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--matches" | "-m" => {
                matches = Some(flag_value(args, i, "--matches")?);
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(flag_value(args, i, "--seed")?);
                i += 1;
            }
            "--out" | "-o" => {
                out = Some(flag_value(args, i, "--out")?);
                i += 1;
            }
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            path => {
                if config_path.is_some() {
                    bail!("unexpected argument: {path}");
                }
                config_path = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => TournamentConfig::load(path)?,
        None => TournamentConfig::default(),
    };
    if let Some(n) = matches {
        config.num_matches = n;
    }
    if let Some(s) = seed {
        config.seed = s;
    }

    let results = run_tournament(&config)?;
    results.print_report();

    if let Some(path) = out {
        results
            .save(&path)
            .with_context(|| format!("failed to save results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn report(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("report requires a results file");
    };
    let results = TournamentResults::load(Path::new(path))
        .with_context(|| format!("failed to load results from {path}"))?;
    results.print_report();
    Ok(())
}

fn sample_config() -> Result<()> {
    let text = TournamentConfig::default().to_toml_string()?;
    print!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "run" => run(&args[2..]),
        "report" => report(&args[2..]),
        "sample-config" => sample_config(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
}
