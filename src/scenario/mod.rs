//! Conversion of scenario configuration into runtime solver inputs.

use aim_config::{PolicyConfig, ScenarioConfig, SearchSettings, TargetConfig, WeaponConfig};
use aim_core::vector::Vector3;
use aim_export::intercept::{HitSummary, Summary};
use aim_intercept::{
    InterceptError, InterceptOutcome, SearchConfig, UnreachablePolicy, UnreachableReason,
    solve_intercept_3d,
};
use aim_predict::{
    BallisticPredictor, CircularPredictor, LinearPredictor, Stationary, TargetPredictor,
};
use aim_stationary::{AimError, WeaponSpec};
use thiserror::Error;

/// Errors surfaced when turning configuration into a runnable scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario '{0}' not found in catalog")]
    NotFound(String),
    #[error("scenario catalog is empty")]
    EmptyCatalog,
    #[error("weapon '{0}' not found in catalog")]
    WeaponNotFound(String),
    #[error("weapon catalog is empty")]
    EmptyWeaponCatalog,
    #[error("scenario '{0}' uses an unsupported target motion type")]
    UnsupportedTarget(String),
    #[error("invalid weapon: {0}")]
    Weapon(#[from] AimError),
    #[error("invalid search settings: {0}")]
    Search(#[from] InterceptError),
}

/// World-space target motion selected by a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionModel {
    Stationary(Stationary<3>),
    Linear(LinearPredictor<3>),
    Ballistic(BallisticPredictor<3>),
    Circular(CircularPredictor<3>),
}

impl TargetPredictor for MotionModel {
    type Position = Vector3;

    fn predict(&self, t: f64) -> Vector3 {
        match self {
            MotionModel::Stationary(p) => p.predict(t),
            MotionModel::Linear(p) => p.predict(t),
            MotionModel::Ballistic(p) => p.predict(t),
            MotionModel::Circular(p) => p.predict(t),
        }
    }
}

/// Runtime scenario with validated weapon and search parameters.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub weapon: WeaponSpec,
    pub search: SearchConfig,
    pub shooter: Vector3,
    pub target: MotionModel,
}

impl Scenario {
    /// Run the intercept search for this scenario.
    pub fn solve(&self) -> Result<InterceptOutcome<Vector3>, InterceptError> {
        solve_intercept_3d(&self.target, &self.weapon, self.shooter, &self.search)
    }

    /// Build the JSON sidecar for an outcome of this scenario.
    pub fn summary(&self, outcome: &InterceptOutcome<Vector3>) -> Summary {
        let unreachable = match outcome {
            InterceptOutcome::Hit(_) => None,
            InterceptOutcome::Unreachable(reason) => Some(*reason),
        };
        Summary {
            scenario: self.name.clone(),
            weapon: self.weapon,
            time_step_s: self.search.time_step,
            max_time_s: self.search.max_time,
            policy: self.search.policy,
            hit: HitSummary::from_outcome(outcome),
            unreachable,
        }
    }
}

/// Human-readable explanation of why no intercept was found.
pub fn describe_unreachable(reason: &UnreachableReason) -> String {
    match reason {
        UnreachableReason::OutOfRange { guess_time } => {
            format!("target out of range at t = {guess_time:.3} s")
        }
        UnreachableReason::HorizonExhausted {
            max_time,
            iterations,
        } => format!("no intercept within {max_time:.3} s ({iterations} candidates)"),
    }
}

/// Convert a `WeaponConfig` into a validated `WeaponSpec`.
pub fn weapon_from_config(config: &WeaponConfig) -> Result<WeaponSpec, ScenarioError> {
    Ok(WeaponSpec::new(config.muzzle_speed, config.gravity)?)
}

/// Convert search settings into a validated `SearchConfig`.
pub fn search_from_config(settings: &SearchSettings) -> Result<SearchConfig, ScenarioError> {
    let policy = match settings.policy {
        PolicyConfig::Abort => UnreachablePolicy::Abort,
        PolicyConfig::Skip => UnreachablePolicy::Skip,
    };
    Ok(SearchConfig::new(settings.time_step, settings.max_time)?.with_policy(policy))
}

/// Convert a `ScenarioConfig` into its runtime representation.
pub fn from_config(config: &ScenarioConfig) -> Result<Scenario, ScenarioError> {
    let target = match config.target {
        TargetConfig::Stationary { position } => MotionModel::Stationary(Stationary(position)),
        TargetConfig::Linear { position, velocity } => {
            MotionModel::Linear(LinearPredictor { position, velocity })
        }
        TargetConfig::Ballistic {
            position,
            velocity,
            target_gravity,
        } => MotionModel::Ballistic(BallisticPredictor {
            position,
            velocity,
            target_gravity,
        }),
        TargetConfig::Circular {
            center,
            radius,
            angular_rate,
            phase,
        } => MotionModel::Circular(CircularPredictor::new(center, radius, angular_rate, phase)),
        TargetConfig::Unsupported => {
            return Err(ScenarioError::UnsupportedTarget(config.name.clone()));
        }
    };

    Ok(Scenario {
        name: config.name.clone(),
        weapon: weapon_from_config(&config.weapon)?,
        search: search_from_config(&config.search)?,
        shooter: config.shooter,
        target,
    })
}

/// Select a scenario by optional name (case-insensitive), defaulting to the first entry.
pub fn select(
    configs: &[ScenarioConfig],
    requested: Option<&str>,
) -> Result<Scenario, ScenarioError> {
    if configs.is_empty() {
        return Err(ScenarioError::EmptyCatalog);
    }

    let chosen = match requested {
        Some(name) => {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| ScenarioError::NotFound(name.to_string()))?
        }
        None => &configs[0],
    };

    from_config(chosen)
}

/// Select a weapon from a catalog by name (case-insensitive).
pub fn select_weapon(weapons: &[WeaponConfig], name: &str) -> Result<WeaponSpec, ScenarioError> {
    if weapons.is_empty() {
        return Err(ScenarioError::EmptyWeaponCatalog);
    }

    let upper = name.to_uppercase();
    let chosen = weapons
        .iter()
        .find(|cfg| cfg.name.to_uppercase() == upper)
        .ok_or_else(|| ScenarioError::WeaponNotFound(name.to_string()))?;
    weapon_from_config(chosen)
}
