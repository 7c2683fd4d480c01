//! Configuration models and loaders for weapons and intercept scenarios.

use std::fs::File;
use std::path::{Path, PathBuf};

use aim_core::constants::{DEFAULT_MAX_TIME_S, DEFAULT_TIME_STEP_S};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Weapon entry from a catalog or an inline scenario block.
#[derive(Debug, Deserialize, Clone)]
pub struct WeaponConfig {
    #[serde(default)]
    pub name: String,
    pub muzzle_speed: f64,
    pub gravity: f64,
}

/// Policy applied when a candidate time is out of range.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PolicyConfig {
    #[default]
    Abort,
    Skip,
}

/// Intercept search tunables. Missing fields fall back to workspace defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchSettings {
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_max_time")]
    pub max_time: f64,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP_S,
            max_time: DEFAULT_MAX_TIME_S,
            policy: PolicyConfig::Abort,
        }
    }
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP_S
}

fn default_max_time() -> f64 {
    DEFAULT_MAX_TIME_S
}

/// Target motion model in world space (z up).
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum TargetConfig {
    #[serde(rename = "stationary")]
    Stationary { position: [f64; 3] },
    #[serde(rename = "linear")]
    Linear {
        position: [f64; 3],
        velocity: [f64; 3],
    },
    #[serde(rename = "ballistic")]
    Ballistic {
        position: [f64; 3],
        velocity: [f64; 3],
        target_gravity: f64,
    },
    #[serde(rename = "circular")]
    Circular {
        center: [f64; 3],
        radius: f64,
        angular_rate: f64,
        #[serde(default)]
        phase: f64,
    },
    #[serde(other)]
    Unsupported,
}

/// A complete aiming problem: who shoots, with what, at which motion.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    pub weapon: WeaponConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub shooter: [f64; 3],
    pub target: TargetConfig,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load scenarios from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let scenarios: Vec<ScenarioConfig> = load_records(path.as_ref())?;
    debug!(
        "loaded {} scenario(s) from {}",
        scenarios.len(),
        path.as_ref().display()
    );
    Ok(scenarios)
}

/// Load a weapon catalog.
pub fn load_weapons<P: AsRef<Path>>(path: P) -> Result<Vec<WeaponConfig>, ConfigError> {
    let weapons: Vec<WeaponConfig> = load_records(path.as_ref())?;
    debug!(
        "loaded {} weapon(s) from {}",
        weapons.len(),
        path.as_ref().display()
    );
    Ok(weapons)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        return scenario_files(path)?.iter().map(|file| read_toml(file)).collect();
    }
    if is_toml(path) {
        return Ok(vec![read_toml(path)?]);
    }
    Ok(serde_yaml::from_reader(File::open(path)?)?)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn read_toml<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
}

/// `.toml` files directly inside `dir`, sorted by path so numeric prefixes order the catalog.
fn scenario_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_toml(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_defaults_fill_missing_search_and_shooter() {
        let yaml = r#"
- name: drone
  weapon: { muzzle_speed: 600.0, gravity: 400.0 }
  target:
    type: linear
    position: [450.0, 0.0, 0.0]
    velocity: [100.0, 0.0, 0.0]
"#;
        let scenarios: Vec<ScenarioConfig> = serde_yaml::from_str(yaml).expect("yaml");
        let scenario = &scenarios[0];
        assert_eq!(scenario.shooter, [0.0, 0.0, 0.0]);
        assert_eq!(scenario.search.time_step, DEFAULT_TIME_STEP_S);
        assert_eq!(scenario.search.max_time, DEFAULT_MAX_TIME_S);
        assert_eq!(scenario.search.policy, PolicyConfig::Abort);
        assert!(matches!(scenario.target, TargetConfig::Linear { .. }));
    }

    #[test]
    fn unknown_target_type_is_flagged_unsupported() {
        let toml_src = r#"
name = "teleporter"
weapon = { muzzle_speed = 100.0, gravity = 9.81 }
search = { policy = "skip" }

[target]
type = "teleport"
"#;
        let scenario: ScenarioConfig = toml::from_str(toml_src).expect("toml");
        assert!(matches!(scenario.target, TargetConfig::Unsupported));
        assert_eq!(scenario.search.policy, PolicyConfig::Skip);
    }
}
