//! Numeric series for plotting the quark densities and cross-sections.

use serde::Serialize;

use super::constants::{X_MAX, X_MIN};
use super::error::{PhysicsError, PhysicsResult};
use super::quark::{QuarkDistributionParams, linspace};

/// Grid size used when the caller does not choose one.
pub const DEFAULT_SERIES_POINTS: usize = 1000;

/// Upper bound on the grid size.
pub const MAX_SERIES_POINTS: usize = 100_000;

/// The densities, cross-sections and their ratios on a common grid.
///
/// Densities are `None` where they diverge, which happens at x = 1 when an
/// exponent b lies in (-1, 0). Ratios are `None` wherever either side is
/// undefined or the denominator is not positive, which includes the upper
/// edge of the support when the densities vanish there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSeries {
    pub x: Vec<f64>,
    pub u: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
    pub u_over_d: Vec<Option<f64>>,
    pub sigma1: Vec<Option<f64>>,
    pub sigma2: Vec<Option<f64>>,
    pub sigma1_over_sigma2: Vec<Option<f64>>,
}

impl DistributionSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (n, d) = (numerator?, denominator?);
    (d > 0.0).then(|| n / d)
}

/// Evaluate everything on `points` evenly spaced x over the support.
///
/// # Errors
///
/// - [`PhysicsError::Validation`] when `points` is below 2 or above
///   [`MAX_SERIES_POINTS`].
/// - Any error from [`QuarkDistributionParams::validate`].
pub fn quark_distribution_series(
    params: &QuarkDistributionParams,
    points: usize,
) -> PhysicsResult<DistributionSeries> {
    if !(2..=MAX_SERIES_POINTS).contains(&points) {
        return Err(PhysicsError::validation(format!(
            "points must be between 2 and {MAX_SERIES_POINTS}, got {points}"
        )));
    }
    params.validate()?;

    let x: Vec<f64> = linspace(X_MIN, X_MAX, points).collect();
    let u: Vec<Option<f64>> = x.iter().map(|&x| finite(params.u(x))).collect();
    let d: Vec<Option<f64>> = x.iter().map(|&x| finite(params.d(x))).collect();
    let sigma1: Vec<Option<f64>> = x.iter().map(|&x| finite(params.sigma1(x))).collect();
    let sigma2: Vec<Option<f64>> = x.iter().map(|&x| finite(params.sigma2(x))).collect();
    let u_over_d = u.iter().zip(&d).map(|(&u, &d)| ratio(u, d)).collect();
    let sigma1_over_sigma2 = sigma1
        .iter()
        .zip(&sigma2)
        .map(|(&s1, &s2)| ratio(s1, s2))
        .collect();

    Ok(DistributionSeries {
        x,
        u,
        d,
        u_over_d,
        sigma1,
        sigma2,
        sigma1_over_sigma2,
    })
}
