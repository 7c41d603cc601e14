use std::path::PathBuf;

use anyhow::Context;

use crate::config::ProjectionConfig;
use crate::math::{IntegrationMethod, YearSeries};
use crate::projection::{MassBalanceTable, OutlookFacts, ScenarioProjection, TrendModels};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub net_change_plot: PathBuf,
    pub storage_plot: PathBuf,
}

impl OutputPaths {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            json_path: out_dir.join("outlook.json"),
            tsv_path: out_dir.join("mass_balance.tsv"),
            net_change_plot: out_dir.join("net_change.svg"),
            storage_plot: out_dir.join("storage_scenarios.svg"),
            out_dir,
        }
    }
}

#[derive(Debug)]
pub struct Ctx {
    pub config_path: Option<PathBuf>,
    pub integrator_override: Option<IntegrationMethod>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_plots: bool,
    pub config: Option<ProjectionConfig>,
    pub models: Option<TrendModels>,
    pub series: Option<YearSeries>,
    pub inflow: Vec<f64>,
    pub outflow: Vec<f64>,
    pub net_change: Vec<f64>,
    pub cumulative: Vec<f64>,
    pub scenarios: Vec<ScenarioProjection>,
    pub table: Option<MassBalanceTable>,
    pub facts: Option<OutlookFacts>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        out_dir: PathBuf,
        config_path: Option<PathBuf>,
        write_json: bool,
        write_tsv: bool,
        write_plots: bool,
    ) -> Self {
        Self {
            config_path,
            integrator_override: None,
            write_json,
            write_tsv,
            write_plots,
            config: None,
            models: None,
            series: None,
            inflow: Vec::new(),
            outflow: Vec::new(),
            net_change: Vec::new(),
            cumulative: Vec::new(),
            scenarios: Vec::new(),
            table: None,
            facts: None,
            warnings: Vec::new(),
            output: OutputPaths::new(out_dir),
        }
    }

    pub fn writes_files(&self) -> bool {
        self.write_json || self.write_tsv || self.write_plots
    }

    pub fn config(&self) -> anyhow::Result<&ProjectionConfig> {
        self.config.as_ref().context("projection config not loaded")
    }

    pub fn models(&self) -> anyhow::Result<&TrendModels> {
        self.models.as_ref().context("trend models missing")
    }

    pub fn series(&self) -> anyhow::Result<&YearSeries> {
        self.series.as_ref().context("year series missing")
    }

    pub fn table(&self) -> anyhow::Result<&MassBalanceTable> {
        self.table.as_ref().context("mass balance table missing")
    }

    pub fn facts(&self) -> anyhow::Result<&OutlookFacts> {
        self.facts.as_ref().context("outlook facts missing")
    }
}
