use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::math::LinearModel;
use crate::schema::v1::{Facts, LinearFit, Models, OutlookV1, ScenarioSummary, SeriesRow, YearValue};

pub fn build_report(ctx: &Ctx) -> Result<OutlookV1> {
    let cfg = ctx.config()?;
    let models = ctx.models()?;
    let facts = ctx.facts()?;
    let table = ctx.table()?;

    let scenarios = ctx
        .scenarios
        .iter()
        .map(|s| ScenarioSummary {
            label: s.bound.label.as_str().to_string(),
            description: s.bound.label.describe().to_string(),
            initial_storage: s.bound.initial_storage,
            final_storage: s.storage.last().copied().unwrap_or(s.bound.initial_storage),
            depletion_year: s.depletion.year(),
            reached: s.depletion.year().is_some(),
        })
        .collect::<Vec<_>>();

    let series = table
        .rows()
        .iter()
        .map(|r| SeriesRow {
            year: r.year,
            inflow: r.ins,
            outflow: r.outs,
            net_change: r.change,
            cumulative_change: r.cumulative_loss,
            storage_low: r.storage_low,
            storage_mean: r.storage_mean,
            storage_high: r.storage_high,
        })
        .collect::<Vec<_>>();

    Ok(OutlookV1 {
        tool: "aquifer-outlook".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: "v1".to_string(),
        config: cfg.clone(),
        integrator: cfg.integrator.as_str().to_string(),
        models: Models {
            inflow: fit(&models.inflow),
            outflow: fit(&models.outflow),
            net_change: fit(&models.net_change),
        },
        facts: Facts {
            decline_per_decade: facts.decline_per_decade,
            max_net_change: YearValue {
                year: facts.max_change.year,
                value: facts.max_change.value,
            },
            min_net_change: YearValue {
                year: facts.min_change.year,
                value: facts.min_change.value,
            },
            sign_change_year: facts.sign_change_year,
        },
        scenarios,
        warnings: ctx.warnings.clone(),
        series,
    })
}

pub fn write_json(path: &Path, report: &OutlookV1) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

fn fit(model: &LinearModel) -> LinearFit {
    LinearFit {
        slope: model.slope,
        intercept: model.intercept,
    }
}
