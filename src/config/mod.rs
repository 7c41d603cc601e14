mod loader;

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::math::{IntegrationMethod, Observation, YearSeries};
use crate::projection::{ScenarioBound, ScenarioLabel};

pub use loader::{ConfigOverlay, ScenarioStorageOverlay, load_builtin_v1, load_overlay, parse_config};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioStorage {
    pub low: f64,
    pub mean: f64,
    pub high: f64,
}

/// Net change values as published alongside the flow estimates. Only used
/// to cross-check the derived net-change line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetChangeCheck {
    pub base: f64,
    #[serde(rename = "final")]
    pub final_: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionConfig {
    pub base_year: i32,
    pub final_year: i32,
    pub year_step: i32,
    pub base_year_inflow: f64,
    pub final_year_inflow: f64,
    pub base_year_outflow: f64,
    pub final_year_outflow: f64,
    pub scenario_initial_storage: ScenarioStorage,
    #[serde(default)]
    pub integrator: IntegrationMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_change_check: Option<NetChangeCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_sigma: Option<f64>,
}

impl ProjectionConfig {
    pub fn inflow_observations(&self) -> (Observation, Observation) {
        (
            Observation::new(self.base_year, self.base_year_inflow),
            Observation::new(self.final_year, self.final_year_inflow),
        )
    }

    pub fn outflow_observations(&self) -> (Observation, Observation) {
        (
            Observation::new(self.base_year, self.base_year_outflow),
            Observation::new(self.final_year, self.final_year_outflow),
        )
    }

    /// Ordered low, mean, high.
    pub fn scenario_bounds(&self) -> [ScenarioBound; 3] {
        let s = &self.scenario_initial_storage;
        [
            ScenarioBound {
                label: ScenarioLabel::Low,
                initial_storage: s.low,
            },
            ScenarioBound {
                label: ScenarioLabel::Mean,
                initial_storage: s.mean,
            },
            ScenarioBound {
                label: ScenarioLabel::High,
                initial_storage: s.high,
            },
        ]
    }

    pub fn year_series(&self) -> Result<YearSeries, ProjectionError> {
        YearSeries::new(self.base_year, self.final_year, self.year_step)
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        let numbers = [
            ("base_year_inflow", self.base_year_inflow),
            ("final_year_inflow", self.final_year_inflow),
            ("base_year_outflow", self.base_year_outflow),
            ("final_year_outflow", self.final_year_outflow),
            ("scenario_initial_storage.low", self.scenario_initial_storage.low),
            ("scenario_initial_storage.mean", self.scenario_initial_storage.mean),
            ("scenario_initial_storage.high", self.scenario_initial_storage.high),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(ProjectionError::InvalidConfig(format!(
                    "{} must be finite",
                    name
                )));
            }
        }
        if self.final_year <= self.base_year {
            return Err(ProjectionError::InvalidRange(format!(
                "final_year {} must be after base_year {}",
                self.final_year, self.base_year
            )));
        }
        if self.year_step <= 0 {
            return Err(ProjectionError::InvalidRange(format!(
                "year_step must be positive (got {})",
                self.year_step
            )));
        }
        let s = &self.scenario_initial_storage;
        if !(s.low <= s.mean && s.mean <= s.high) {
            return Err(ProjectionError::InvalidConfig(format!(
                "scenario storage must satisfy low <= mean <= high (got {}, {}, {})",
                s.low, s.mean, s.high
            )));
        }
        if let Some(sigma) = self.storage_sigma {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(ProjectionError::InvalidConfig(format!(
                    "storage_sigma must be a non-negative number (got {})",
                    sigma
                )));
            }
        }
        Ok(())
    }
}

pub fn load_builtin() -> Result<ProjectionConfig> {
    load_builtin_v1()
}

/// Built-in defaults, optionally overlaid by a user JSON file.
pub fn load_effective(path: Option<&Path>) -> Result<ProjectionConfig> {
    let builtin = load_builtin()?;
    match path {
        Some(path) => Ok(load_overlay(path)?.apply(builtin)),
        None => Ok(builtin),
    }
}
