//! `covplan.toml` loading and command-line overrides.
//!
//! ```toml
//! start = { row = 0, col = 0 }
//!
//! [energy]
//! max_energy = 300
//! low_energy_threshold = 60
//! require_round_trip = true
//!
//! [output]
//! dir = "out"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use cov_core::{Cell, EnergyConfig, PlannerConfig};

/// Contents of a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub energy: EnergyConfig,
    pub start:  Option<Cell>,
    pub output: OutputConfig,
}

/// Where the waypoint files go.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from(".") }
    }
}

/// Values given on the command line; `None` keeps the file's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_energy:           Option<u32>,
    pub low_energy_threshold: Option<u32>,
    pub start:                Option<Cell>,
    pub no_round_trip:        bool,
    pub out_dir:              Option<PathBuf>,
}

impl FileConfig {
    /// Read `path`, or return defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply(&mut self, o: &Overrides) {
        if let Some(v) = o.max_energy {
            self.energy.max_energy = v;
        }
        if let Some(v) = o.low_energy_threshold {
            self.energy.low_energy_threshold = v;
        }
        if o.start.is_some() {
            self.start = o.start;
        }
        if o.no_round_trip {
            self.energy.require_round_trip = false;
        }
        if let Some(dir) = &o.out_dir {
            self.output.dir = dir.clone();
        }
    }

    /// The planner's share of the file, validated.
    pub fn planner(&self) -> Result<PlannerConfig> {
        let config = PlannerConfig { energy: self.energy.clone(), start: self.start };
        config.validate()?;
        Ok(config)
    }
}

/// Parse `"row,col"` for `--start`.
pub fn parse_cell(s: &str) -> Result<Cell> {
    let Some((row, col)) = s.split_once(',') else {
        bail!("expected ROW,COL, got {s:?}");
    };
    let row = row.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
    let col = col.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
    Ok(Cell::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let cfg = FileConfig::load(None).unwrap();
        assert_eq!(cfg.energy, EnergyConfig::default());
        assert_eq!(cfg.start, None);
        assert_eq!(cfg.output.dir, PathBuf::from("."));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = FileConfig::parse("start = { row = 2, col = 3 }\n[energy]\nmax_energy = 120\n").unwrap();
        assert_eq!(cfg.start, Some(Cell::new(2, 3)));
        assert_eq!(cfg.energy.max_energy, 120);
        assert_eq!(cfg.energy.low_energy_threshold, 60);
        assert!(cfg.energy.require_round_trip);
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("covplan.toml");
        fs::write(&path, "[output]\ndir = \"maps/out\"\n").unwrap();
        let cfg = FileConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.dir, PathBuf::from("maps/out"));
    }

    #[test]
    fn overrides_win() {
        let mut cfg = FileConfig::parse("[energy]\nmax_energy = 120\n").unwrap();
        cfg.apply(&Overrides {
            max_energy:           Some(80),
            low_energy_threshold: Some(10),
            start:                Some(Cell::new(1, 1)),
            no_round_trip:        true,
            out_dir:              None,
        });
        let planner = cfg.planner().unwrap();
        assert_eq!(planner.energy.max_energy, 80);
        assert_eq!(planner.energy.low_energy_threshold, 10);
        assert!(!planner.energy.require_round_trip);
        assert_eq!(planner.start, Some(Cell::new(1, 1)));
    }

    #[test]
    fn invalid_energy_rejected() {
        let cfg = FileConfig::parse("[energy]\nmax_energy = 50\nlow_energy_threshold = 50\n").unwrap();
        assert!(cfg.planner().is_err());
    }

    #[test]
    fn cell_argument() {
        assert_eq!(parse_cell("3, 4").unwrap(), Cell::new(3, 4));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }
}
