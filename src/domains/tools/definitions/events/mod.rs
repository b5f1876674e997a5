//! Quark-distribution event generation and visualization tools.

pub mod generate;
pub mod visualize;

pub use generate::{GenerateEventsParams, GenerateEventsTool};
pub use visualize::{VisualizeDistributionsParams, VisualizeDistributionsTool};

use crate::physics::{PhysicsResult, QuarkDistributionParams};

/// Resolve optional `truth_params` to a parameter set, defaulting when absent.
pub(crate) fn resolve_params(truth_params: Option<&[f64]>) -> PhysicsResult<QuarkDistributionParams> {
    match truth_params {
        Some(values) => QuarkDistributionParams::try_from(values),
        None => Ok(QuarkDistributionParams::default()),
    }
}
