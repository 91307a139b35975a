//! covplan: energy-aware coverage planning from the command line.
//!
//! Reads a grid map, plans a full-coverage path, supervises it for energy,
//! and writes three waypoint files into the output directory:
//!
//! | File                     | Contents                                       |
//! |--------------------------|------------------------------------------------|
//! | `waypoint.txt`           | energy-aware path, one `(row, col)` per line   |
//! | `waypoint_energy.txt`    | same path with header and energy annotations   |
//! | `waypoint_original.txt`  | coverage path before charging detours          |
//!
//! ```text
//! covplan map.txt --out out/ --max-energy 200 --threshold 40
//! RUST_LOG=debug COVPLAN_LOG_FORMAT=json covplan map.txt
//! ```

mod config;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use cov_core::{Cell, load_grid};
use cov_energy::MissionStatus;
use cov_output::{EnergyHeader, TextWriter, WaypointStream, write_waypoints};
use cov_plan::{CoverageStatus, PlannerBuilder};
use cov_spatial::BfsRouter;

use config::{FileConfig, Overrides, parse_cell};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Plan an energy-aware coverage path over a grid map.
#[derive(Parser, Debug)]
#[command(name = "covplan", version, about)]
struct Cli {
    /// Grid map: `0` free, `1` wall, `2` charger, one row per line.
    map: PathBuf,

    /// TOML configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output directory (created if missing).
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Full-charge capacity.
    #[arg(long)]
    max_energy: Option<u32>,

    /// Low-energy threshold.
    #[arg(long)]
    threshold: Option<u32>,

    /// Start cell as ROW,COL.
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Take the nearest reachable charger without checking the way back.
    #[arg(long)]
    no_round_trip: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            max_energy:           self.max_energy,
            low_energy_threshold: self.threshold,
            start:                self.start,
            no_round_trip:        self.no_round_trip,
            out_dir:              self.out.clone(),
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("COVPLAN_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut file = FileConfig::load(cli.config.as_deref())?;
    file.apply(&cli.overrides());
    let config = file.planner()?;
    let out_dir = file.output.dir;
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;

    let t0 = Instant::now();
    let grid = load_grid(&cli.map).with_context(|| format!("loading map {}", cli.map.display()))?;
    info!(
        map = %cli.map.display(),
        width = grid.width(),
        height = grid.height(),
        free = grid.free_count(),
        chargers = grid.chargers().len(),
        "map loaded"
    );

    let planner = PlannerBuilder::new(grid, BfsRouter).config(config.clone()).build()?;
    info!(start = %planner.start(), regions = planner.segmentation().len(), "planner ready");

    // Annotated file is streamed while the supervisor runs.
    let energy_path = out_dir.join("waypoint_energy.txt");
    let mut stream = WaypointStream::new(
        TextWriter::create(&energy_path)?,
        EnergyHeader::from(&config.energy),
    );
    let report = planner.run(&mut stream)?;
    if let Some(e) = stream.take_error() {
        return Err(e).with_context(|| format!("writing {}", energy_path.display()));
    }
    drop(stream);

    write_waypoints(&out_dir.join("waypoint.txt"), &report.energy.path)?;
    write_waypoints(&out_dir.join("waypoint_original.txt"), &report.plan.waypoints)?;

    if let CoverageStatus::Partial { dropped, unreachable_regions } = &report.plan.status {
        warn!(
            dropped = dropped.len(),
            unreachable_regions = unreachable_regions.len(),
            "coverage incomplete"
        );
    }
    if let MissionStatus::Exhausted { at } = report.energy.status {
        warn!(at = %at, "energy exhausted; partial path written");
    }

    let m = &report.metrics;
    println!("Planned path   : {} waypoints ({} moves)", report.energy.path.len(), m.length);
    println!("Coverage path  : {} waypoints", report.plan.waypoints.len());
    println!(
        "Coverage       : {}/{} free cells ({:.1}%)",
        m.covered_free,
        m.total_free,
        m.coverage_ratio * 100.0
    );
    println!("Turns          : {}", m.turns);
    println!("Charging stops : {}", report.energy.charging_events.len());
    println!("Low alerts     : {}", report.energy.low_energy_alerts());
    println!("Detour steps   : {}", report.energy.detour_steps(report.plan.waypoints.len()));
    println!("Continuous     : {}", m.continuous);
    println!("Output         : {}", out_dir.display());
    println!("Elapsed        : {:.2?}", t0.elapsed());

    Ok(())
}
