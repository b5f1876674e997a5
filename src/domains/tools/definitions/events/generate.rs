//! Event generation tool definition.
//!
//! Draws toy events from the σ1 = 4u + d and σ2 = 4d + u channel densities
//! and reports sample and analytic statistics. Runs are reproducible from
//! the seed reported in the result.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, error_result, physics_error_result, success_result};
use super::resolve_params;
use crate::domains::tools::ToolContext;
use crate::physics::{DEFAULT_NUM_EVENTS, generate_events_with_samples};

/// Most individual events a single call will return.
pub const MAX_RETURNED_SAMPLES: usize = 1000;

fn default_num_events() -> i64 {
    DEFAULT_NUM_EVENTS
}

/// Parameters for the event generation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateEventsParams {
    /// Number of events to generate.
    #[serde(default = "default_num_events")]
    pub num_events: i64,

    /// Optional list of 6 parameters [u_a, u_b, u_p, d_a, d_b, d_q].
    #[serde(default)]
    pub truth_params: Option<Vec<f64>>,

    /// Random seed for reproducibility. A fresh seed is drawn and reported when omitted.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of individual events to include in the result (at most 1000).
    #[serde(default)]
    pub include_samples: usize,
}

/// Event generation tool.
pub struct GenerateEventsTool;

impl ToolDefinition for GenerateEventsTool {
    const NAME: &'static str = "generate_physics_events";

    const DESCRIPTION: &'static str = "Generate particle physics events from the quark distribution model \
         u(x) = u_p·x^u_a·(1-x)^u_b, d(x) = d_q·x^d_a·(1-x)^d_b over x in [0.1, 1]. \
         Reports mean and standard deviation of σ1 = 4u + d and σ2 = 4d + u with analytic \
         references, and the seed used.";

    type Params = GenerateEventsParams;

    #[instrument(skip_all, fields(num_events = params.num_events, seed = ?params.seed))]
    fn execute(params: &Self::Params, ctx: &ToolContext) -> CallToolResult {
        info!("Generate events tool called");

        let max_events = ctx.config.events.max_events;
        if params.num_events > max_events {
            return error_result(format!(
                "num_events {} exceeds the configured maximum of {}",
                params.num_events, max_events
            ));
        }
        if params.include_samples > MAX_RETURNED_SAMPLES {
            return error_result(format!(
                "include_samples {} exceeds the maximum of {}",
                params.include_samples, MAX_RETURNED_SAMPLES
            ));
        }

        let truth = match resolve_params(params.truth_params.as_deref()) {
            Ok(p) => p,
            Err(e) => return physics_error_result(&e),
        };

        let (summary, samples) = match generate_events_with_samples(
            params.num_events,
            truth,
            params.seed,
            params.include_samples,
        ) {
            Ok(out) => out,
            Err(e) => return physics_error_result(&e),
        };

        info!(seed = summary.seed, "Generated {} events", summary.num_events);

        let text = summary.to_string();
        let mut data = serde_json::json!({ "summary": summary });
        if !samples.is_empty() {
            data["samples"] = serde_json::json!(samples);
        }
        success_result(text, data)
    }
}
