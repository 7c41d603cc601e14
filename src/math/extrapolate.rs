use crate::error::ProjectionError;
use crate::math::fit::LinearModel;

/// Ordered, non-empty, strictly increasing list of simulated years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSeries {
    years: Vec<i32>,
}

impl YearSeries {
    pub fn new(start: i32, end: i32, step: i32) -> Result<Self, ProjectionError> {
        if step <= 0 {
            return Err(ProjectionError::InvalidRange(format!(
                "step must be positive (got {})",
                step
            )));
        }
        if end < start {
            return Err(ProjectionError::InvalidRange(format!(
                "end year {} precedes start year {}",
                end, start
            )));
        }
        let years = (start..=end).step_by(step as usize).collect();
        Self::from_years(years)
    }

    pub fn from_years(years: Vec<i32>) -> Result<Self, ProjectionError> {
        if years.is_empty() {
            return Err(ProjectionError::InvalidRange(
                "year series is empty".to_string(),
            ));
        }
        if let Some(w) = years.windows(2).find(|w| w[1] <= w[0]) {
            return Err(ProjectionError::InvalidRange(format!(
                "year series not strictly increasing at {} -> {}",
                w[0], w[1]
            )));
        }
        Ok(Self { years })
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    // Construction guarantees at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> i32 {
        self.years[0]
    }

    pub fn last(&self) -> i32 {
        self.years[self.years.len() - 1]
    }
}

pub fn extrapolate(model: &LinearModel, series: &YearSeries) -> Vec<f64> {
    series
        .years()
        .iter()
        .map(|&year| model.eval(year as f64))
        .collect()
}
