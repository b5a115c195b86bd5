use anyhow::Context;
use dignitas::{
    AlmutenResult, ChartPoint, ChartScores, ChartSnapshot, DignityEngine, Doryphoros, Planet, ScoringConfig,
    Strongest,
};
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct AscendantReport {
    almuten: AlmutenResult,
    doryphoros: Option<Doryphoros>,
}

#[derive(Debug, Serialize)]
struct Output {
    reports: ChartScores,
    strongest: Strongest,
    #[serde(skip_serializing_if = "Option::is_none")]
    auriga: Option<Planet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ascendant: Option<AscendantReport>,
}

fn usage() -> anyhow::Error {
    anyhow::anyhow!("usage: dignity-report <snapshot.json> [config.toml]")
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ScoringConfig> {
    match path {
        // An explicit config must load
        Some(path) => dignitas_config::load_scoring_config_from(&path),
        None => Ok(dignitas_config::load_scoring_config().unwrap_or_else(|e| {
            warn!("{e}; using default scoring config");
            ScoringConfig::default()
        })),
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let snapshot_path = PathBuf::from(args.next().ok_or_else(usage)?);
    let config = load_config(args.next().map(PathBuf::from))?;

    let text = fs::read_to_string(&snapshot_path)
        .with_context(|| format!("reading {}", snapshot_path.display()))?;
    let chart = ChartSnapshot::from_json(&text).with_context(|| format!("parsing {}", snapshot_path.display()))?;

    let engine = DignityEngine::new(config)?;
    // Planets with a bad body are logged and left out of the output
    let reports = engine.score_lenient(&chart);
    info!("Scored {} planets from {}", reports.len(), snapshot_path.display());

    let ascendant = match chart.ascendant {
        Some(_) => Some(AscendantReport {
            almuten: engine.almuten_with_scores(&chart, &reports, ChartPoint::Ascendant)?,
            doryphoros: engine.doryphoros(&chart, ChartPoint::Ascendant)?,
        }),
        None => None,
    };
    let auriga = match engine.auriga(&chart) {
        Ok(planet) => planet,
        Err(e) => {
            warn!("No Auriga: {e}");
            None
        }
    };

    let output = Output {
        strongest: dignitas::points::strongest(&reports),
        reports,
        auriga,
        ascendant,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("dignity-report: {e:#}");
        std::process::exit(1);
    }
}
