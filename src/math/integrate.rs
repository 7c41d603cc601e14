//! Cumulative integration of the net-change line.
//!
//! Two interchangeable methods: the closed form of a linear integral and a
//! general adaptive Simpson quadrature. On a linear integrand they agree to
//! rounding error.

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::math::extrapolate::YearSeries;
use crate::math::fit::LinearModel;

pub const DEFAULT_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_MAX_DEPTH: u32 = 50;

/// Floor on the acceptance threshold, relative to the magnitude of the
/// segment estimate. Below it `delta` is rounding noise in `f`.
const ROUNDING_FLOOR: f64 = 64.0 * f64::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationMethod {
    #[default]
    ClosedForm,
    AdaptiveSimpson,
}

impl IntegrationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClosedForm => "closed-form",
            Self::AdaptiveSimpson => "adaptive-simpson",
        }
    }
}

/// Integral of `model` from `base_year` to every year of `series`.
/// The entry for `base_year` itself is exactly zero.
pub fn cumulative(
    model: &LinearModel,
    base_year: i32,
    series: &YearSeries,
    method: IntegrationMethod,
) -> Result<Vec<f64>, ProjectionError> {
    let base = base_year as f64;
    let integrand = |t: f64| model.eval(t);

    let mut out = Vec::with_capacity(series.len());
    for &year in series.years() {
        let value = if year == base_year {
            0.0
        } else {
            match method {
                IntegrationMethod::ClosedForm => model.integral(base, year as f64),
                IntegrationMethod::AdaptiveSimpson => adaptive_simpson(
                    &integrand,
                    base,
                    year as f64,
                    tolerance_for(model, base, year as f64),
                    DEFAULT_MAX_DEPTH,
                ),
            }
        };
        if !value.is_finite() {
            return Err(ProjectionError::NonFinite {
                what: "cumulative change",
                year,
            });
        }
        out.push(value);
    }
    Ok(out)
}

/// `DEFAULT_TOLERANCE`, raised to the rounding error of evaluating `model`
/// over `[base, year]`. `slope * t` and `intercept` can cancel, so the bound
/// uses the size of the terms rather than of `model(t)`.
fn tolerance_for(model: &LinearModel, base: f64, year: f64) -> f64 {
    let term = model.slope.abs() * base.abs().max(year.abs()) + model.intercept.abs();
    DEFAULT_TOLERANCE.max(ROUNDING_FLOOR * term * (year - base).abs())
}

/// Adaptive Simpson quadrature of `f` over `[a, b]`. `b < a` yields the
/// negated integral.
pub fn adaptive_simpson<F>(f: &F, a: f64, b: f64, tol: f64, max_depth: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return 0.0;
    }
    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);
    refine(f, Segment { a, b, fa, fm, fb }, whole, tol, max_depth)
}

#[derive(Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<F>(f: &F, seg: Segment, whole: f64, tol: f64, depth: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (seg.a + seg.b);
    let flm = f(0.5 * (seg.a + m));
    let frm = f(0.5 * (m + seg.b));
    let left = simpson(seg.a, m, seg.fa, flm, seg.fm);
    let right = simpson(m, seg.b, seg.fm, frm, seg.fb);
    let delta = left + right - whole;
    let scale = simpson(seg.a, seg.b, seg.fa.abs(), seg.fm.abs(), seg.fb.abs()).abs();

    // Richardson correction on acceptance.
    if depth == 0 || delta.abs() <= 15.0 * tol.max(ROUNDING_FLOOR * scale) {
        return left + right + delta / 15.0;
    }

    let left_seg = Segment {
        a: seg.a,
        b: m,
        fa: seg.fa,
        fm: flm,
        fb: seg.fm,
    };
    let right_seg = Segment {
        a: m,
        b: seg.b,
        fa: seg.fm,
        fm: frm,
        fb: seg.fb,
    };
    refine(f, left_seg, left, tol / 2.0, depth - 1)
        + refine(f, right_seg, right, tol / 2.0, depth - 1)
}
