//! Quark distribution visualization tool definition.
//!
//! Produces the numeric series behind the four standard panels: u and d,
//! u/d, σ1 and σ2, and σ1/σ2. Rendering is left to the client.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, physics_error_result, success_result};
use super::resolve_params;
use crate::domains::tools::ToolContext;
use crate::physics::{DEFAULT_SERIES_POINTS, DistributionSeries, quark_distribution_series};

fn default_points() -> usize {
    DEFAULT_SERIES_POINTS
}

/// Parameters for the visualization tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VisualizeDistributionsParams {
    /// Optional list of 6 parameters [u_a, u_b, u_p, d_a, d_b, d_q].
    #[serde(default)]
    pub truth_params: Option<Vec<f64>>,

    /// Number of grid points over x in [0.1, 1] (default 1000).
    #[serde(default = "default_points")]
    pub points: usize,
}

/// Visualization series tool.
pub struct VisualizeDistributionsTool;

impl ToolDefinition for VisualizeDistributionsTool {
    const NAME: &'static str = "visualize_quark_distributions";

    const DESCRIPTION: &'static str = "Evaluate the u and d quark distributions, their ratio u/d, the cross-sections \
         σ1 = 4u + d and σ2 = 4d + u, and σ1/σ2 over a grid of x in [0.1, 1]. Returns the \
         numeric series for plotting.";

    type Params = VisualizeDistributionsParams;

    #[instrument(skip_all, fields(points = params.points))]
    fn execute(params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("Visualize distributions tool called");

        let truth = match resolve_params(params.truth_params.as_deref()) {
            Ok(p) => p,
            Err(e) => return physics_error_result(&e),
        };
        let series = match quark_distribution_series(&truth, params.points) {
            Ok(s) => s,
            Err(e) => return physics_error_result(&e),
        };

        let text = format!(
            "Quark distribution series for parameters {:?}: {} points over x in [{}, {}]\n\
             Panels: u and d quark distributions, u/d ratio, cross-sections σ1 = 4u + d and σ2 = 4d + u, σ1/σ2 ratio\n\
             {}\n{}\n{}\n{}",
            truth.to_array(),
            series.len(),
            series.x.first().copied().unwrap_or_default(),
            series.x.last().copied().unwrap_or_default(),
            range_line("u(x)", &series.u),
            range_line("d(x)", &series.d),
            range_line("σ1(x)", &series.sigma1),
            ratio_line("σ1/σ2", &series),
        );
        success_result(
            text,
            serde_json::json!({ "truth_params": truth, "series": series }),
        )
    }
}

fn range_line(label: &str, values: &[Option<f64>]) -> String {
    let min = values.iter().flatten().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max);
    let divergent = values.iter().filter(|v| v.is_none()).count();
    if divergent == 0 {
        format!("  {label}: min {min:.4}, max {max:.4}")
    } else {
        format!("  {label}: min {min:.4}, max {max:.4} (divergent at {divergent} of {} points)", values.len())
    }
}

fn ratio_line(label: &str, series: &DistributionSeries) -> String {
    let defined: Vec<f64> = series.sigma1_over_sigma2.iter().flatten().copied().collect();
    let undefined = series.len() - defined.len();
    let min = defined.iter().copied().fold(f64::INFINITY, f64::min);
    let max = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    format!("  {label}: min {min:.4}, max {max:.4} ({undefined} points undefined)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_default_series() {
        let result =
            VisualizeDistributionsTool::call(serde_json::json!({}), &ToolContext::default()).unwrap();
        assert_eq!(result.is_error, Some(false));
        let data = result.structured_content.clone().unwrap();
        assert_eq!(data["series"]["x"].as_array().unwrap().len(), 1000);
        // u/d is undefined at x = 1 where both densities vanish
        assert!(data["series"]["u_over_d"][999].is_null());
        assert!(result_text(&result).unwrap().contains("1000 points"));
    }

    #[test]
    fn test_deterministic() {
        let params = VisualizeDistributionsParams {
            truth_params: None,
            points: 50,
        };
        let ctx = ToolContext::default();
        let a = VisualizeDistributionsTool::execute(&params, &ctx);
        let b = VisualizeDistributionsTool::execute(&params, &ctx);
        assert_eq!(a.structured_content, b.structured_content);
    }

    #[test]
    fn test_single_point_rejected() {
        let params = VisualizeDistributionsParams {
            truth_params: None,
            points: 1,
        };
        let result = VisualizeDistributionsTool::execute(&params, &ToolContext::default());
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_integrable_edge_singularity_reports_divergence() {
        let params = VisualizeDistributionsParams {
            truth_params: Some(vec![-0.4, -0.5, 0.5, -0.06, 0.4, 0.48]),
            points: 10,
        };
        let result = VisualizeDistributionsTool::execute(&params, &ToolContext::default());
        assert_eq!(result.is_error, Some(false));
        let data = result.structured_content.clone().unwrap();
        assert!(data["series"]["u"][9].is_null());
        assert!(result_text(&result).unwrap().contains("divergent at 1 of 10 points"));
    }
}
