use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_config;
pub mod stage2_fit;
pub mod stage3_extrapolate;
pub mod stage4_integrate;
pub mod stage5_project;
pub mod stage6_report;
pub mod stage7_output;

use stage0_scaffold::Stage0Scaffold;
use stage1_config::Stage1Config;
use stage2_fit::Stage2Fit;
use stage3_extrapolate::Stage3Extrapolate;
use stage4_integrate::Stage4Integrate;
use stage5_project::Stage5Project;
use stage6_report::Stage6Report;
use stage7_output::Stage7Output;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Fit, project, report and write outputs.
    pub fn full() -> Self {
        Self::new(vec![
            Box::new(Stage0Scaffold::new()),
            Box::new(Stage1Config::new()),
            Box::new(Stage2Fit::new()),
            Box::new(Stage3Extrapolate::new()),
            Box::new(Stage4Integrate::new()),
            Box::new(Stage5Project::new()),
            Box::new(Stage6Report::new()),
            Box::new(Stage7Output::new()),
        ])
    }

    /// Everything up to the facts; no filesystem access beyond the config.
    pub fn validation() -> Self {
        Self::new(vec![
            Box::new(Stage1Config::new()),
            Box::new(Stage2Fit::new()),
            Box::new(Stage3Extrapolate::new()),
            Box::new(Stage4Integrate::new()),
            Box::new(Stage5Project::new()),
            Box::new(Stage6Report::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
