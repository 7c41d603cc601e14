use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

impl Observation {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// `value = slope * year + intercept`, in 10^9 m^3/yr.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    pub fn eval(&self, year: f64) -> f64 {
        self.slope * year + self.intercept
    }

    /// Net change as `inflow - outflow`, term by term. This is the only way
    /// the net-change line is produced.
    pub fn net_change(inflow: &LinearModel, outflow: &LinearModel) -> LinearModel {
        LinearModel {
            slope: inflow.slope - outflow.slope,
            intercept: inflow.intercept - outflow.intercept,
        }
    }

    /// Closed-form definite integral from `base` to `year`.
    pub fn integral(&self, base: f64, year: f64) -> f64 {
        self.slope / 2.0 * (year * year - base * base) + self.intercept * (year - base)
    }
}

pub fn fit_two_point(a: Observation, b: Observation) -> Result<LinearModel, ProjectionError> {
    if a.year == b.year {
        return Err(ProjectionError::DegenerateFit { year: a.year });
    }
    let slope = (b.value - a.value) / (b.year as f64 - a.year as f64);
    let intercept = a.value - slope * a.year as f64;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ProjectionError::NonFinite {
            what: "trend fit",
            year: a.year,
        });
    }
    Ok(LinearModel { slope, intercept })
}
