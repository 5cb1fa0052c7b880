use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PROFILE_POINTS: usize = 500;
pub const MIN_PROFILE_POINTS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// How the uncertainty of an in-domain integral is propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UncertaintyModel {
    /// First-order propagation: `sqrt(sum((dI/dp * err_p)^2))` over
    /// `x, slope0, slope1, intercept0, intercept1`.
    #[default]
    DeltaMethod,
    /// The earlier closed-form expression, for comparison with published numbers.
    /// Its `(intercept0 - mean_energy1 + slope1)^2` term does not treat the two
    /// end-states symmetrically.
    Legacy,
}

impl UncertaintyModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UncertaintyModel::DeltaMethod => "delta-method",
            UncertaintyModel::Legacy => "legacy",
        }
    }
}

impl fmt::Display for UncertaintyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UncertaintyModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delta-method" | "delta" => Ok(UncertaintyModel::DeltaMethod),
            "legacy" => Ok(UncertaintyModel::Legacy),
            other => Err(ConfigError::InvalidParameter {
                name: "uncertainty_model",
                reason: format!("unknown model '{}', expected 'delta-method' or 'legacy'", other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub points: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationConfig {
    pub uncertainty_model: UncertaintyModel,
    pub profile: ProfileConfig,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            uncertainty_model: UncertaintyModel::default(),
            profile: ProfileConfig {
                points: DEFAULT_PROFILE_POINTS,
            },
        }
    }
}

#[derive(Default)]
pub struct IntegrationConfigBuilder {
    uncertainty_model: Option<UncertaintyModel>,
    profile_points: Option<usize>,
}

impl IntegrationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uncertainty_model(mut self, model: UncertaintyModel) -> Self {
        self.uncertainty_model = Some(model);
        self
    }
    pub fn profile_points(mut self, points: usize) -> Self {
        self.profile_points = Some(points);
        self
    }

    pub fn build(self) -> Result<IntegrationConfig, ConfigError> {
        let points = self
            .profile_points
            .ok_or(ConfigError::MissingParameter("profile_points"))?;
        if points < MIN_PROFILE_POINTS {
            return Err(ConfigError::InvalidParameter {
                name: "profile_points",
                reason: format!("at least {} points are required, got {}", MIN_PROFILE_POINTS, points),
            });
        }

        Ok(IntegrationConfig {
            uncertainty_model: self
                .uncertainty_model
                .ok_or(ConfigError::MissingParameter("uncertainty_model"))?,
            profile: ProfileConfig { points },
        })
    }
}
