use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::LinearModel;

pub mod facts;
pub mod scenario;
pub mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioLabel {
    Low,
    Mean,
    High,
}

impl ScenarioLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mean => "mean",
            Self::High => "high",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Low => "5th percentile",
            Self::Mean => "mean",
            Self::High => "95th percentile",
        }
    }
}

/// Initial storage assumption, 10^9 m^3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioBound {
    pub label: ScenarioLabel,
    pub initial_storage: f64,
}

/// First year with storage at or below zero. `NotReached` is a result, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depletion {
    Reached(i32),
    NotReached,
}

impl Depletion {
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::Reached(year) => Some(*year),
            Self::NotReached => None,
        }
    }
}

impl fmt::Display for Depletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reached(year) => write!(f, "{}", year),
            Self::NotReached => f.write_str("not reached"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModels {
    pub inflow: LinearModel,
    pub outflow: LinearModel,
    pub net_change: LinearModel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioProjection {
    pub bound: ScenarioBound,
    pub storage: Vec<f64>,
    pub depletion: Depletion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassBalanceRow {
    pub year: i32,
    pub ins: f64,
    pub outs: f64,
    pub change: f64,
    pub cumulative_loss: f64,
    pub storage_low: f64,
    pub storage_mean: f64,
    pub storage_high: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassBalanceTable {
    rows: Vec<MassBalanceRow>,
}

impl MassBalanceTable {
    pub fn rows(&self) -> &[MassBalanceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlookFacts {
    /// Decrease of net change per decade; positive means worsening.
    pub decline_per_decade: f64,
    pub max_change: YearValue,
    pub min_change: YearValue,
    pub sign_change_year: Option<i32>,
    pub depletion: Vec<(ScenarioLabel, Depletion)>,
}
