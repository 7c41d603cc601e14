use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::projection::scenario::project_scenarios;
use crate::projection::table::build_table;

pub struct Stage5Project;

impl Stage5Project {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Project {
    fn name(&self) -> &'static str {
        "stage5_project"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let bounds = ctx.config()?.scenario_bounds();
        let series = ctx.series()?;
        let scenarios = project_scenarios(&bounds, series, &ctx.cumulative)?;
        let table = build_table(series, &ctx.inflow, &ctx.outflow, &ctx.cumulative, &scenarios)?;

        for s in &scenarios {
            info!(
                scenario = s.bound.label.as_str(),
                initial_storage = s.bound.initial_storage,
                depletion = %s.depletion,
                "scenario_projected"
            );
        }
        ctx.scenarios = scenarios;
        ctx.table = Some(table);
        Ok(())
    }
}
