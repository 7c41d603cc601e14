use anyhow::{Context, Result, bail};

use crate::math::YearSeries;
use crate::projection::{MassBalanceRow, MassBalanceTable, ScenarioLabel, ScenarioProjection};

/// `ins - outs` per year. Net change is never refit independently.
pub fn net_change_column(ins: &[f64], outs: &[f64]) -> Result<Vec<f64>> {
    ensure_len(outs.len(), ins.len(), "outflow")?;
    Ok(ins.iter().zip(outs).map(|(i, o)| i - o).collect())
}

pub fn build_table(
    series: &YearSeries,
    ins: &[f64],
    outs: &[f64],
    cumulative: &[f64],
    scenarios: &[ScenarioProjection],
) -> Result<MassBalanceTable> {
    let n = series.len();
    ensure_len(ins.len(), n, "inflow")?;
    ensure_len(outs.len(), n, "outflow")?;
    ensure_len(cumulative.len(), n, "cumulative")?;

    let low = storage_for(scenarios, ScenarioLabel::Low, n)?;
    let mean = storage_for(scenarios, ScenarioLabel::Mean, n)?;
    let high = storage_for(scenarios, ScenarioLabel::High, n)?;
    let change = net_change_column(ins, outs)?;

    let rows = series
        .years()
        .iter()
        .enumerate()
        .map(|(i, &year)| MassBalanceRow {
            year,
            ins: ins[i],
            outs: outs[i],
            change: change[i],
            cumulative_loss: cumulative[i],
            storage_low: low[i],
            storage_mean: mean[i],
            storage_high: high[i],
        })
        .collect();
    Ok(MassBalanceTable { rows })
}

fn storage_for(
    scenarios: &[ScenarioProjection],
    label: ScenarioLabel,
    n: usize,
) -> Result<&[f64]> {
    let scenario = scenarios
        .iter()
        .find(|s| s.bound.label == label)
        .with_context(|| format!("scenario {} missing", label.as_str()))?;
    ensure_len(scenario.storage.len(), n, label.as_str())?;
    Ok(&scenario.storage)
}

fn ensure_len(got: usize, expected: usize, name: &str) -> Result<()> {
    if got != expected {
        bail!("{} length mismatch: {} != {}", name, got, expected);
    }
    Ok(())
}
