// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// --- RenderStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  /// Page size in points.
  pub page_width: f64,
  pub page_height: f64,
  /// Plot box as fractions of the page (left, right, bottom, top).
  pub plot_box: [f64; 4],
  /// Padding added on each side, as a fraction of the data span.
  pub margin: f64,

  pub shape_color: (f64, f64, f64),
  pub shifted_shape_color: (f64, f64, f64),
  pub rectangle_alpha: f64,
  pub quad_alpha: f64,
  pub shape_edge_width: f64,

  pub lead_color: (f64, f64, f64),
  pub next_cell_color: (f64, f64, f64),
  pub coupling_color: (f64, f64, f64),

  /// Scatter marker size in pt²; the marker diameter is its square root.
  pub marker_area: f64,
  pub marker_edge_width: f64,
  pub marker_edge_color: (f64, f64, f64),

  pub frame_width: f64,
  pub tick_font_size: f64,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      page_width: 460.8,
      page_height: 345.6,
      plot_box: [0.125, 0.9, 0.11, 0.88],
      margin: 0.1,

      shape_color: (0.5, 0.5, 0.5),
      shifted_shape_color: (0.0, 0.5, 0.0),
      rectangle_alpha: 0.1,
      quad_alpha: 0.2,
      shape_edge_width: 1.0,

      lead_color: (0.5, 0.5, 0.5),
      next_cell_color: (0.0, 0.5, 0.0),
      coupling_color: (1.0, 0.0, 0.0),

      marker_area: 10.0,
      marker_edge_width: 1.0,
      marker_edge_color: (0.0, 0.0, 0.0),

      frame_width: 0.8,
      tick_font_size: 10.0,
    }
  }
}

// --- Load outcome ---

/// How `Config::load` arrived at its result.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
  Loaded(PathBuf),
  NoConfigDir,
  NotFound,
  /// The file exists but could not be used; defaults were substituted.
  Unreadable(String),
}

impl LoadOutcome {
  pub fn is_fallback(&self) -> bool {
    matches!(self, LoadOutcome::Unreadable(_))
  }
}

impl fmt::Display for LoadOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LoadOutcome::Loaded(path) => write!(f, "Config loaded from {:?}", path),
      LoadOutcome::NoConfigDir => write!(f, "No config directory. Using defaults."),
      LoadOutcome::NotFound => write!(f, "No config found. Using defaults."),
      LoadOutcome::Unreadable(why) => write!(f, "{}. Using defaults.", why),
    }
  }
}

// --- Main Config Struct ---

/// Figure styling only; the output is always `lead.pdf`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
  #[serde(default)]
  pub style: RenderStyle,
}

impl Config {
  /// Loads config from the standard OS location (e.g. ~/.config/leadplot/settings.json).
  /// Never fails: problems fall back to defaults and are described in the outcome.
  pub fn load() -> (Self, LoadOutcome) {
    match Self::get_path() {
      Some(path) => Self::load_from(&path),
      None => (Self::default(), LoadOutcome::NoConfigDir),
    }
  }

  pub fn load_from(path: &Path) -> (Self, LoadOutcome) {
    if !path.exists() {
      return (Self::default(), LoadOutcome::NotFound);
    }
    match File::open(path) {
      Ok(file) => {
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
          Ok(cfg) => (cfg, LoadOutcome::Loaded(path.to_path_buf())),
          Err(e) => (
            Self::default(),
            LoadOutcome::Unreadable(format!("Error parsing config: {}", e)),
          ),
        }
      }
      Err(e) => (
        Self::default(),
        LoadOutcome::Unreadable(format!("Error opening config: {}", e)),
      ),
    }
  }

  fn get_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "lattice", "leadplot").map(|proj| proj.config_dir().join("settings.json"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, outcome) = Config::load_from(&dir.path().join("settings.json"));
    assert_eq!(cfg, Config::default());
    assert_eq!(outcome, LoadOutcome::NotFound);
    assert!(!outcome.is_fallback());
    assert!(outcome.to_string().starts_with("No config found"));
  }

  #[test]
  fn test_partial_style_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "style": { "marker_area": 25.0 } }"#).unwrap();

    let (cfg, outcome) = Config::load_from(&path);
    assert_eq!(outcome, LoadOutcome::Loaded(path.clone()));
    assert_eq!(cfg.style.marker_area, 25.0);
    assert_eq!(cfg.style.margin, 0.1);
  }

  #[test]
  fn test_output_format_key_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "export_format": "Png", "style": { "quad_alpha": 0.5 } }"#).unwrap();

    let (cfg, outcome) = Config::load_from(&path);
    assert!(matches!(outcome, LoadOutcome::Loaded(_)));
    assert_eq!(cfg.style.quad_alpha, 0.5);
  }

  #[test]
  fn test_broken_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let (cfg, outcome) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(outcome.is_fallback());
    assert!(outcome.to_string().starts_with("Error parsing config"));
  }
}
