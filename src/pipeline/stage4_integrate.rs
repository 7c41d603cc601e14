use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::cumulative;
use crate::pipeline::Stage;

pub struct Stage4Integrate;

impl Stage4Integrate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Integrate {
    fn name(&self) -> &'static str {
        "stage4_integrate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let cfg = ctx.config()?;
        let method = cfg.integrator;
        let values = cumulative(
            &ctx.models()?.net_change,
            cfg.base_year,
            ctx.series()?,
            method,
        )?;
        info!(
            integrator = method.as_str(),
            final_cumulative = values.last().copied().unwrap_or(0.0),
            "cumulative_change_ready"
        );
        ctx.cumulative = values;
        Ok(())
    }
}
