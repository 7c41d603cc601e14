use thiserror::Error;

/// Domain failures of the projection itself. Application plumbing wraps these
/// in `anyhow` with context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid year range: {0}")]
    InvalidRange(String),

    #[error("cannot fit a line through two observations at year {year}")]
    DegenerateFit { year: i32 },

    #[error("non-finite {what} at year {year}")]
    NonFinite { what: &'static str, year: i32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
