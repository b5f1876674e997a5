//! Parametric quark momentum-fraction densities.
//!
//! ```text
//! u(x) = u_p · x^u_a · (1 − x)^u_b
//! d(x) = d_q · x^d_a · (1 − x)^d_b
//! σ1   = 4u + d      (e-p deep-inelastic combination)
//! σ2   = 4d + u      (e-n deep-inelastic combination)
//! ```

use serde::{Deserialize, Serialize};

use super::constants::{X_MAX, X_MIN};
use super::error::{PhysicsError, PhysicsResult, ensure_finite};

/// Default truth parameters `[u_a, u_b, u_p, d_a, d_b, d_q]`.
pub const DEFAULT_TRUTH_PARAMS: [f64; 6] = [-0.4, 2.4, 0.5, -0.06, 0.4, 0.48];

/// Points of the coarse grid used to validate densities before sampling.
const VALIDATION_GRID_POINTS: usize = 33;

/// Shape parameters of the u and d densities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuarkDistributionParams {
    pub u_a: f64,
    pub u_b: f64,
    pub u_p: f64,
    pub d_a: f64,
    pub d_b: f64,
    pub d_q: f64,
}

impl Default for QuarkDistributionParams {
    fn default() -> Self {
        Self::from_array(DEFAULT_TRUTH_PARAMS)
    }
}

impl TryFrom<&[f64]> for QuarkDistributionParams {
    type Error = PhysicsError;

    fn try_from(values: &[f64]) -> PhysicsResult<Self> {
        let array: [f64; 6] = values.try_into().map_err(|_| {
            PhysicsError::validation(format!(
                "expected 6 parameters [u_a, u_b, u_p, d_a, d_b, d_q], got {}",
                values.len()
            ))
        })?;
        Ok(Self::from_array(array))
    }
}

impl QuarkDistributionParams {
    /// Build from `[u_a, u_b, u_p, d_a, d_b, d_q]`.
    pub const fn from_array(p: [f64; 6]) -> Self {
        Self {
            u_a: p[0],
            u_b: p[1],
            u_p: p[2],
            d_a: p[3],
            d_b: p[4],
            d_q: p[5],
        }
    }

    /// The parameters as `[u_a, u_b, u_p, d_a, d_b, d_q]`.
    pub const fn to_array(&self) -> [f64; 6] {
        [self.u_a, self.u_b, self.u_p, self.d_a, self.d_b, self.d_q]
    }

    /// u-quark density at `x`.
    pub fn u(&self, x: f64) -> f64 {
        self.u_p * x.powf(self.u_a) * (1.0 - x).powf(self.u_b)
    }

    /// d-quark density at `x`.
    pub fn d(&self, x: f64) -> f64 {
        self.d_q * x.powf(self.d_a) * (1.0 - x).powf(self.d_b)
    }

    /// `σ1 = 4u + d`.
    pub fn sigma1(&self, x: f64) -> f64 {
        4.0 * self.u(x) + self.d(x)
    }

    /// `σ2 = 4d + u`.
    pub fn sigma2(&self, x: f64) -> f64 {
        4.0 * self.d(x) + self.u(x)
    }

    /// Check the parameters before any evaluation or sampling.
    ///
    /// All parameters must be finite. A density whose `(1 - x)^b` factor has
    /// `b <= -1` is not integrable at x = 1 and is rejected; `-1 < b < 0`
    /// diverges at the edge but stays normalizable. Both densities must be
    /// finite and non-negative on a coarse grid of interior points, with at
    /// least one of them positive somewhere.
    ///
    /// # Errors
    ///
    /// - [`PhysicsError::Validation`] for non-finite parameters.
    /// - [`PhysicsError::NumericalInconsistency`] for densities that go
    ///   negative, cannot be normalized, or vanish everywhere.
    pub fn validate(&self) -> PhysicsResult<()> {
        const NAMES: [&str; 6] = ["u_a", "u_b", "u_p", "d_a", "d_b", "d_q"];
        for (name, value) in NAMES.iter().zip(self.to_array()) {
            ensure_finite(name, value)?;
        }

        for (label, amplitude, b) in [("u", self.u_p, self.u_b), ("d", self.d_q, self.d_b)] {
            if amplitude != 0.0 && b <= -1.0 {
                return Err(PhysicsError::inconsistent(format!(
                    "{label}(x) has (1 - x)^{b}, which is not integrable at x = {X_MAX}; \
                     the density is not normalizable on [{X_MIN}, {X_MAX}]"
                )));
            }
        }

        // x = X_MAX is left out: (1 - x)^b with -1 < b < 0 is infinite there
        // but integrable.
        let mut any_positive = false;
        let grid = linspace(X_MIN, X_MAX, VALIDATION_GRID_POINTS + 1);
        for x in grid.take(VALIDATION_GRID_POINTS) {
            for (label, value) in [("u", self.u(x)), ("d", self.d(x))] {
                if !value.is_finite() {
                    return Err(PhysicsError::inconsistent(format!(
                        "{label}(x) diverges at x = {x}; the density is not normalizable on [{X_MIN}, {X_MAX}]"
                    )));
                }
                if value < 0.0 {
                    return Err(PhysicsError::inconsistent(format!(
                        "{label}(x) = {value} is negative at x = {x}; densities must be non-negative"
                    )));
                }
                any_positive |= value > 0.0;
            }
        }

        if !any_positive {
            return Err(PhysicsError::inconsistent(
                "both densities vanish on the support; nothing to normalize",
            ));
        }
        Ok(())
    }
}

/// `points` evenly spaced values from `start` to `end`, both included.
pub(crate) fn linspace(start: f64, end: f64, points: usize) -> impl Iterator<Item = f64> {
    let step = if points > 1 {
        (end - start) / (points - 1) as f64
    } else {
        0.0
    };
    (0..points).map(move |i| {
        if i + 1 == points {
            end
        } else {
            start + step * i as f64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = QuarkDistributionParams::default();
        assert_eq!(params.to_array(), DEFAULT_TRUTH_PARAMS);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_try_from_slice() {
        let params = QuarkDistributionParams::try_from(&DEFAULT_TRUTH_PARAMS[..]).unwrap();
        assert_eq!(params.u_b, 2.4);
        assert_eq!(params.d_q, 0.48);

        let err = QuarkDistributionParams::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert!(matches!(err, PhysicsError::Validation(_)));
    }

    #[test]
    fn test_cross_sections_combine_densities() {
        let params = QuarkDistributionParams::default();
        let x = 0.3;
        let (u, d) = (params.u(x), params.d(x));
        assert_eq!(params.sigma1(x), 4.0 * u + d);
        assert_eq!(params.sigma2(x), 4.0 * d + u);
    }

    #[test]
    fn test_density_vanishes_at_upper_edge() {
        let params = QuarkDistributionParams::default();
        assert_eq!(params.u(1.0), 0.0);
        assert_eq!(params.d(1.0), 0.0);
    }

    #[test]
    fn test_negative_amplitude_is_inconsistent() {
        let params = QuarkDistributionParams::from_array([-0.4, 2.4, -0.5, -0.06, 0.4, 0.48]);
        assert!(matches!(
            params.validate(),
            Err(PhysicsError::NumericalInconsistency(_))
        ));
    }

    #[test]
    fn test_divergent_density_is_inconsistent() {
        let params = QuarkDistributionParams::from_array([-0.4, -1.5, 0.5, -0.06, 0.4, 0.48]);
        assert!(matches!(
            params.validate(),
            Err(PhysicsError::NumericalInconsistency(_))
        ));

        let params = QuarkDistributionParams::from_array([-0.4, 2.4, 0.5, -0.06, -1.0, 0.48]);
        assert!(matches!(
            params.validate(),
            Err(PhysicsError::NumericalInconsistency(_))
        ));
    }

    #[test]
    fn test_integrable_edge_singularity_is_accepted() {
        let params = QuarkDistributionParams::from_array([-0.4, -0.5, 0.5, -0.06, 0.4, 0.48]);
        assert!(params.u(1.0).is_infinite());
        assert!(params.validate().is_ok());

        // A zero amplitude switches the density off whatever its exponent.
        let params = QuarkDistributionParams::from_array([-0.4, 2.4, 0.5, -0.06, -3.0, 0.0]);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_vanishing_densities_are_inconsistent() {
        let params = QuarkDistributionParams::from_array([-0.4, 2.4, 0.0, -0.06, 0.4, 0.0]);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_finite_params_are_invalid() {
        let params = QuarkDistributionParams::from_array([f64::NAN, 2.4, 0.5, -0.06, 0.4, 0.48]);
        assert!(matches!(params.validate(), Err(PhysicsError::Validation(_))));
    }

    #[test]
    fn test_linspace_hits_both_ends() {
        let xs: Vec<f64> = linspace(0.1, 1.0, 10).collect();
        assert_eq!(xs.len(), 10);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[9], 1.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }
}
