use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::{NetChangeCheck, ProjectionConfig};
use crate::math::IntegrationMethod;

pub fn load_builtin_v1() -> Result<ProjectionConfig> {
    let content = include_str!("../../assets/config/default_v1.json");
    parse_config(content, "built-in v1")
}

pub fn parse_config(content: &str, source: &str) -> Result<ProjectionConfig> {
    serde_json::from_str(content).with_context(|| format!("{}: malformed projection config", source))
}

pub fn load_overlay(path: &Path) -> Result<ConfigOverlay> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{}: malformed config overlay", path.display()))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioStorageOverlay {
    pub low: Option<f64>,
    pub mean: Option<f64>,
    pub high: Option<f64>,
}

/// User-supplied config. Every field is optional; present fields replace
/// the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverlay {
    pub base_year: Option<i32>,
    pub final_year: Option<i32>,
    pub year_step: Option<i32>,
    pub base_year_inflow: Option<f64>,
    pub final_year_inflow: Option<f64>,
    pub base_year_outflow: Option<f64>,
    pub final_year_outflow: Option<f64>,
    pub scenario_initial_storage: Option<ScenarioStorageOverlay>,
    pub integrator: Option<IntegrationMethod>,
    pub net_change_check: Option<NetChangeCheck>,
    pub storage_sigma: Option<f64>,
}

impl ConfigOverlay {
    pub fn apply(self, mut base: ProjectionConfig) -> ProjectionConfig {
        // A built-in cross-check no longer describes user-supplied flows.
        let flows_changed = self.base_year_inflow.is_some()
            || self.final_year_inflow.is_some()
            || self.base_year_outflow.is_some()
            || self.final_year_outflow.is_some();
        if flows_changed {
            base.net_change_check = None;
        }
        if let Some(v) = self.base_year {
            base.base_year = v;
        }
        if let Some(v) = self.final_year {
            base.final_year = v;
        }
        if let Some(v) = self.year_step {
            base.year_step = v;
        }
        if let Some(v) = self.base_year_inflow {
            base.base_year_inflow = v;
        }
        if let Some(v) = self.final_year_inflow {
            base.final_year_inflow = v;
        }
        if let Some(v) = self.base_year_outflow {
            base.base_year_outflow = v;
        }
        if let Some(v) = self.final_year_outflow {
            base.final_year_outflow = v;
        }
        if let Some(s) = self.scenario_initial_storage {
            let storage = &mut base.scenario_initial_storage;
            storage.low = s.low.unwrap_or(storage.low);
            storage.mean = s.mean.unwrap_or(storage.mean);
            storage.high = s.high.unwrap_or(storage.high);
        }
        if let Some(v) = self.integrator {
            base.integrator = v;
        }
        if let Some(v) = self.net_change_check {
            base.net_change_check = Some(v);
        }
        if let Some(v) = self.storage_sigma {
            base.storage_sigma = Some(v);
        }
        base
    }
}
