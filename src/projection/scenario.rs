use anyhow::{Result, bail};

use crate::math::YearSeries;
use crate::projection::{Depletion, ScenarioBound, ScenarioProjection};

pub fn project(initial_storage: f64, cumulative: &[f64]) -> Vec<f64> {
    cumulative.iter().map(|c| initial_storage + c).collect()
}

pub fn depletion_year(series: &YearSeries, storage: &[f64]) -> Depletion {
    series
        .years()
        .iter()
        .zip(storage)
        .find(|(_, s)| **s <= 0.0)
        .map(|(year, _)| Depletion::Reached(*year))
        .unwrap_or(Depletion::NotReached)
}

pub fn project_scenarios(
    bounds: &[ScenarioBound],
    series: &YearSeries,
    cumulative: &[f64],
) -> Result<Vec<ScenarioProjection>> {
    if cumulative.len() != series.len() {
        bail!(
            "cumulative length mismatch: {} != {}",
            cumulative.len(),
            series.len()
        );
    }
    let mut out = Vec::with_capacity(bounds.len());
    for bound in bounds {
        if !bound.initial_storage.is_finite() {
            bail!("non-finite initial storage for scenario {}", bound.label.as_str());
        }
        let storage = project(bound.initial_storage, cumulative);
        let depletion = depletion_year(series, &storage);
        out.push(ScenarioProjection {
            bound: *bound,
            storage,
            depletion,
        });
    }
    Ok(out)
}
