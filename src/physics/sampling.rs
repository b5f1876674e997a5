//! Inverse-CDF sampling from a tabulated one-dimensional density.
//!
//! The density is integrated cell by cell with two-point Gauss-Legendre
//! quadrature (which never evaluates the interval endpoints), giving a
//! piecewise-linear CDF that is inverted by binary search.

use rand::Rng;

use super::error::{PhysicsError, PhysicsResult};

/// Gauss-Legendre node for the two-point rule on [-1, 1].
const GAUSS_NODE: f64 = 0.577_350_269_189_625_8;

/// Sampler for a non-negative density on a finite interval.
#[derive(Debug, Clone)]
pub struct InverseCdfSampler {
    /// Cell edges, `cells + 1` entries.
    edges: Vec<f64>,
    /// Normalized CDF at each edge; starts at 0, ends at exactly 1.
    cdf: Vec<f64>,
    /// Quadrature nodes with their normalized probability weights.
    nodes: Vec<(f64, f64)>,
    /// Integral of the un-normalized density over the interval.
    normalization: f64,
}

impl InverseCdfSampler {
    /// Tabulate `density` over `[lower, upper]` using `cells` equal cells.
    ///
    /// # Errors
    ///
    /// - [`PhysicsError::Validation`] for an empty interval or zero cells.
    /// - [`PhysicsError::NumericalInconsistency`] if the density is negative
    ///   or non-finite at a quadrature node, or integrates to zero.
    pub fn new<F>(density: F, lower: f64, upper: f64, cells: usize) -> PhysicsResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        if cells == 0 || !(lower < upper) {
            return Err(PhysicsError::validation(format!(
                "invalid sampling grid: [{lower}, {upper}] with {cells} cells"
            )));
        }

        let width = (upper - lower) / cells as f64;
        let mut edges = Vec::with_capacity(cells + 1);
        let mut masses = Vec::with_capacity(cells);
        let mut nodes = Vec::with_capacity(2 * cells);

        for i in 0..cells {
            let a = lower + width * i as f64;
            let b = if i + 1 == cells { upper } else { a + width };
            edges.push(a);

            let half = (b - a) / 2.0;
            let mid = a + half;
            let mut cell_mass = 0.0;
            for x in [mid - half * GAUSS_NODE, mid + half * GAUSS_NODE] {
                let value = density(x);
                if !value.is_finite() || value < 0.0 {
                    return Err(PhysicsError::inconsistent(format!(
                        "density is {value} at x = {x}; expected a finite non-negative value"
                    )));
                }
                let weight = half * value;
                nodes.push((x, weight));
                cell_mass += weight;
            }
            masses.push(cell_mass);
        }
        edges.push(upper);

        let normalization: f64 = masses.iter().sum();
        if !(normalization > 0.0) || !normalization.is_finite() {
            return Err(PhysicsError::inconsistent(format!(
                "density integrates to {normalization} over [{lower}, {upper}]; it cannot be normalized"
            )));
        }

        let mut cdf = Vec::with_capacity(cells + 1);
        let mut running = 0.0;
        cdf.push(0.0);
        for mass in &masses {
            running += mass;
            cdf.push(running / normalization);
        }
        cdf[cells] = 1.0;

        for node in &mut nodes {
            node.1 /= normalization;
        }

        Ok(Self {
            edges,
            cdf,
            nodes,
            normalization,
        })
    }

    /// Integral of the un-normalized density.
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// Map a probability `p` in `[0, 1)` to a value of the variable.
    ///
    /// The result lies in `[lower, upper)`: the upper edge is never returned,
    /// so a density that is infinite there is never evaluated at it.
    pub fn inverse(&self, p: f64) -> f64 {
        let cells = self.edges.len() - 1;
        let upper_index = self.cdf.partition_point(|&c| c <= p);
        let i = upper_index.saturating_sub(1).min(cells - 1);

        let (lo, hi) = (self.cdf[i], self.cdf[i + 1]);
        let fraction = if hi > lo { (p - lo) / (hi - lo) } else { 0.0 };
        let x = self.edges[i] + fraction.clamp(0.0, 1.0) * (self.edges[i + 1] - self.edges[i]);
        x.min(next_below(self.edges[cells]))
    }

    /// Draw one value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.inverse(rng.random::<f64>())
    }

    /// Expectation of `g` under the normalized density.
    pub fn expectation<G>(&self, g: G) -> f64
    where
        G: Fn(f64) -> f64,
    {
        self.nodes.iter().map(|&(x, w)| w * g(x)).sum()
    }

    /// Mean and standard deviation of `g(X)` under the normalized density.
    pub fn moments<G>(&self, g: G) -> (f64, f64)
    where
        G: Fn(f64) -> f64,
    {
        let mean = self.expectation(&g);
        let second = self.expectation(|x| {
            let v = g(x);
            v * v
        });
        (mean, (second - mean * mean).max(0.0).sqrt())
    }
}

/// Largest `f64` strictly below a finite `v`.
fn next_below(v: f64) -> f64 {
    if v > 0.0 {
        f64::from_bits(v.to_bits() - 1)
    } else if v == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(v.to_bits() + 1)
    }
}
