use anyhow::Result;
use tracing::{info, warn};

use crate::config::ProjectionConfig;
use crate::ctx::Ctx;
use crate::math::{LinearModel, fit_two_point};
use crate::pipeline::Stage;
use crate::projection::TrendModels;

const NET_CHANGE_CHECK_TOLERANCE: f64 = 1e-6;

pub struct Stage2Fit;

impl Stage2Fit {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Fit {
    fn name(&self) -> &'static str {
        "stage2_fit"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let cfg = ctx.config()?;
        let (in0, in1) = cfg.inflow_observations();
        let (out0, out1) = cfg.outflow_observations();
        let inflow = fit_two_point(in0, in1)?;
        let outflow = fit_two_point(out0, out1)?;
        let net_change = LinearModel::net_change(&inflow, &outflow);
        let warnings = check_net_change(cfg, &net_change);

        info!(
            inflow_slope = inflow.slope,
            outflow_slope = outflow.slope,
            net_slope = net_change.slope,
            net_intercept = net_change.intercept,
            "trend_models_ready"
        );
        for w in &warnings {
            warn!(warning = %w, "net_change_check_mismatch");
        }

        ctx.warnings.extend(warnings);
        ctx.models = Some(TrendModels {
            inflow,
            outflow,
            net_change,
        });
        Ok(())
    }
}

/// Compares the derived net-change line with the published net values, if
/// any. Mismatches are reported, never used to refit.
pub fn check_net_change(cfg: &ProjectionConfig, net_change: &LinearModel) -> Vec<String> {
    let Some(check) = cfg.net_change_check else {
        return Vec::new();
    };
    let mut warnings = Vec::new();
    for (year, published) in [(cfg.base_year, check.base), (cfg.final_year, check.final_)] {
        let derived = net_change.eval(year as f64);
        if (derived - published).abs() > NET_CHANGE_CHECK_TOLERANCE {
            warnings.push(format!(
                "net change at {} is {:.6} from inflow - outflow but {:.6} was supplied",
                year, derived, published
            ));
        }
    }
    warnings
}
