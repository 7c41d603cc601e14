use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::math::extrapolate;
use crate::pipeline::Stage;
use crate::projection::table::net_change_column;

pub struct Stage3Extrapolate;

impl Stage3Extrapolate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Extrapolate {
    fn name(&self) -> &'static str {
        "stage3_extrapolate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let series = ctx.config()?.year_series()?;
        let models = ctx.models()?;
        let inflow = extrapolate(&models.inflow, &series);
        let outflow = extrapolate(&models.outflow, &series);
        let net_change = net_change_column(&inflow, &outflow)?;

        info!(
            first_year = series.first(),
            last_year = series.last(),
            years = series.len(),
            "year_series_ready"
        );
        ctx.inflow = inflow;
        ctx.outflow = outflow;
        ctx.net_change = net_change;
        ctx.series = Some(series);
        Ok(())
    }
}
