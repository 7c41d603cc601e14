use serde::{Deserialize, Serialize};

use crate::config::ProjectionConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Models {
    pub inflow: LinearFit,
    pub outflow: LinearFit,
    pub net_change: LinearFit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facts {
    pub decline_per_decade: f64,
    pub max_net_change: YearValue,
    pub min_net_change: YearValue,
    pub sign_change_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub label: String,
    pub description: String,
    pub initial_storage: f64,
    pub final_storage: f64,
    pub depletion_year: Option<i32>,
    pub reached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRow {
    pub year: i32,
    pub inflow: f64,
    pub outflow: f64,
    pub net_change: f64,
    pub cumulative_change: f64,
    pub storage_low: f64,
    pub storage_mean: f64,
    pub storage_high: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub config: ProjectionConfig,
    pub integrator: String,
    pub models: Models,
    pub facts: Facts,
    pub scenarios: Vec<ScenarioSummary>,
    pub warnings: Vec<String>,
    pub series: Vec<SeriesRow>,
}
