use anyhow::{Result, bail};

use crate::math::YearSeries;
use crate::projection::{OutlookFacts, ScenarioProjection, TrendModels, YearValue};

pub fn compute_facts(
    models: &TrendModels,
    series: &YearSeries,
    change: &[f64],
    scenarios: &[ScenarioProjection],
) -> Result<OutlookFacts> {
    if change.len() != series.len() {
        bail!(
            "net change length mismatch: {} != {}",
            change.len(),
            series.len()
        );
    }
    if change.iter().any(|v| v.is_nan()) {
        bail!("NaN encountered in net change series");
    }

    let years = series.years();
    let mut max_change = YearValue {
        year: years[0],
        value: change[0],
    };
    let mut min_change = max_change;
    // Strict comparisons keep the earliest year on ties.
    for (&year, &value) in years.iter().zip(change).skip(1) {
        if value > max_change.value {
            max_change = YearValue { year, value };
        }
        if value < min_change.value {
            min_change = YearValue { year, value };
        }
    }

    Ok(OutlookFacts {
        decline_per_decade: -(models.net_change.slope * 10.0),
        max_change,
        min_change,
        sign_change_year: sign_change_year(years, change),
        depletion: scenarios
            .iter()
            .map(|s| (s.bound.label, s.depletion))
            .collect(),
    })
}

/// First year at which net change crosses zero. A run of exact zeros
/// between opposite signs counts from its first year; touching zero and
/// returning to the same sign is not a crossing.
pub fn sign_change_year(years: &[i32], change: &[f64]) -> Option<i32> {
    let mut last_sign: Option<bool> = None;
    let mut zero_start: Option<usize> = None;
    for (i, &v) in change.iter().enumerate() {
        if v == 0.0 {
            if last_sign.is_some() && zero_start.is_none() {
                zero_start = Some(i);
            }
            continue;
        }
        let positive = v > 0.0;
        if last_sign.is_some_and(|prev| prev != positive) {
            return years.get(zero_start.unwrap_or(i)).copied();
        }
        last_sign = Some(positive);
        zero_start = None;
    }
    None
}
