//! Numeric core: two-point trend fits, year-series evaluation and the
//! cumulative integrators.

pub mod extrapolate;
pub mod fit;
pub mod integrate;

pub use extrapolate::{YearSeries, extrapolate};
pub use fit::{LinearModel, Observation, fit_two_point};
pub use integrate::{IntegrationMethod, adaptive_simpson, cumulative};
