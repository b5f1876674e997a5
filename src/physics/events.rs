//! Toy event generation from the quark-distribution model.
//!
//! Each event draws one momentum fraction from each cross-section channel
//! (σ1 and σ2, normalized over the support) and evaluates the cross-section
//! at that point. Runs are reproducible: the generator is a ChaCha stream
//! seeded per call, never a shared global.

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Serialize;
use tracing::{debug, instrument};

use super::constants::{X_MAX, X_MIN};
use super::error::{PhysicsError, PhysicsResult};
use super::quark::QuarkDistributionParams;
use super::sampling::InverseCdfSampler;

/// Number of events generated when the caller does not say.
pub const DEFAULT_NUM_EVENTS: i64 = 10_000;

/// Cells in the tabulated CDF of each channel.
pub const SAMPLER_CELLS: usize = 2048;

/// A cross-section channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// `σ1 = 4u + d`
    Sigma1,
    /// `σ2 = 4d + u`
    Sigma2,
}

impl Channel {
    /// The combination this channel weights.
    pub fn formula(&self) -> &'static str {
        match self {
            Self::Sigma1 => "4u + d",
            Self::Sigma2 => "4d + u",
        }
    }

    /// Evaluate the channel's cross-section at `x`.
    pub fn evaluate(&self, params: &QuarkDistributionParams, x: f64) -> f64 {
        match self {
            Self::Sigma1 => params.sigma1(x),
            Self::Sigma2 => params.sigma2(x),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sigma1 => write!(f, "Sigma1"),
            Self::Sigma2 => write!(f, "Sigma2"),
        }
    }
}

/// One simulated event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventSample {
    /// Momentum fraction drawn from the σ1 channel.
    pub x1: f64,
    /// σ1 evaluated at `x1`.
    pub sigma1: f64,
    /// Momentum fraction drawn from the σ2 channel.
    pub x2: f64,
    /// σ2 evaluated at `x2`.
    pub sigma2: f64,
}

/// Summary statistics for one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelStatistics {
    pub channel: Channel,
    pub formula: &'static str,
    /// Sample mean of the cross-section values.
    pub mean: f64,
    /// Sample standard deviation (population, ddof = 0) of the cross-section values.
    pub std: f64,
    pub x_mean: f64,
    pub x_std: f64,
    /// Mean of the cross-section under the channel density.
    pub analytic_mean: f64,
    pub analytic_std: f64,
    pub analytic_x_mean: f64,
    pub analytic_x_std: f64,
}

/// Result of an event-generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub num_events: u64,
    /// Seed that reproduces this run.
    pub seed: u64,
    pub truth_params: QuarkDistributionParams,
    pub sigma1: ChannelStatistics,
    pub sigma2: ChannelStatistics,
}

impl fmt::Display for EventSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} physics events (seed {}):", self.num_events, self.seed)?;
        for stats in [&self.sigma1, &self.sigma2] {
            writeln!(f)?;
            writeln!(f, "{} ({}) distribution:", stats.channel, stats.formula)?;
            writeln!(f, "  Mean: {:.3}", stats.mean)?;
            writeln!(f, "  Std: {:.3}", stats.std)?;
            writeln!(
                f,
                "  x: mean {:.4}, std {:.4} (analytic {:.4}, {:.4})",
                stats.x_mean, stats.x_std, stats.analytic_x_mean, stats.analytic_x_std
            )?;
        }
        writeln!(f)?;
        write!(f, "Truth parameters used: {:?}", self.truth_params.to_array())
    }
}

/// Welford running mean and variance.
#[derive(Debug, Default, Clone, Copy)]
struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn std(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.m2 / self.count as f64).sqrt()
        }
    }
}

/// Tabulated samplers for both channels of a parameter set.
#[derive(Debug, Clone)]
pub struct EventGenerator {
    params: QuarkDistributionParams,
    sigma1: InverseCdfSampler,
    sigma2: InverseCdfSampler,
}

impl EventGenerator {
    /// Validate `params` and tabulate both channel densities.
    pub fn new(params: QuarkDistributionParams) -> PhysicsResult<Self> {
        params.validate()?;
        let sigma1 = InverseCdfSampler::new(|x| params.sigma1(x), X_MIN, X_MAX, SAMPLER_CELLS)?;
        let sigma2 = InverseCdfSampler::new(|x| params.sigma2(x), X_MIN, X_MAX, SAMPLER_CELLS)?;
        Ok(Self {
            params,
            sigma1,
            sigma2,
        })
    }

    /// The parameters this generator was built from.
    pub fn params(&self) -> &QuarkDistributionParams {
        &self.params
    }

    /// Draw one event.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> EventSample {
        let x1 = self.sigma1.sample(rng);
        let x2 = self.sigma2.sample(rng);
        EventSample {
            x1,
            sigma1: self.params.sigma1(x1),
            x2,
            sigma2: self.params.sigma2(x2),
        }
    }

    /// Draw `n` events.
    pub fn samples<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<EventSample> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Generate `num_events` events from `seed`, keeping the first `keep`.
    pub fn run(&self, num_events: u64, seed: u64, keep: usize) -> (EventSummary, Vec<EventSample>) {
        let mut rng = seeded_rng(seed);
        let mut kept = Vec::with_capacity(keep.min(num_events as usize));
        let mut s1 = RunningStats::default();
        let mut s2 = RunningStats::default();
        let mut x1 = RunningStats::default();
        let mut x2 = RunningStats::default();

        for i in 0..num_events {
            let event = self.sample(&mut rng);
            s1.push(event.sigma1);
            s2.push(event.sigma2);
            x1.push(event.x1);
            x2.push(event.x2);
            if (i as usize) < keep {
                kept.push(event);
            }
        }

        let summary = EventSummary {
            num_events,
            seed,
            truth_params: self.params,
            sigma1: self.channel_statistics(Channel::Sigma1, &s1, &x1),
            sigma2: self.channel_statistics(Channel::Sigma2, &s2, &x2),
        };
        (summary, kept)
    }

    fn channel_statistics(
        &self,
        channel: Channel,
        values: &RunningStats,
        xs: &RunningStats,
    ) -> ChannelStatistics {
        let sampler = match channel {
            Channel::Sigma1 => &self.sigma1,
            Channel::Sigma2 => &self.sigma2,
        };
        let (analytic_mean, analytic_std) = sampler.moments(|x| channel.evaluate(&self.params, x));
        let (analytic_x_mean, analytic_x_std) = sampler.moments(|x| x);

        ChannelStatistics {
            channel,
            formula: channel.formula(),
            mean: values.mean(),
            std: values.std(),
            x_mean: xs.mean(),
            x_std: xs.std(),
            analytic_mean,
            analytic_std,
            analytic_x_mean,
            analytic_x_std,
        }
    }
}

/// A ChaCha generator seeded from `seed`.
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Use the caller's seed, or draw a fresh one from the OS.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Generate events and return summary statistics.
///
/// # Errors
///
/// - [`PhysicsError::Validation`] when `num_events <= 0`.
/// - Any error from [`QuarkDistributionParams::validate`].
pub fn generate_events(
    num_events: i64,
    params: QuarkDistributionParams,
    seed: Option<u64>,
) -> PhysicsResult<EventSummary> {
    generate_events_with_samples(num_events, params, seed, 0).map(|(summary, _)| summary)
}

/// Like [`generate_events`], also returning the first `keep` individual events.
#[instrument(skip(params, seed))]
pub fn generate_events_with_samples(
    num_events: i64,
    params: QuarkDistributionParams,
    seed: Option<u64>,
    keep: usize,
) -> PhysicsResult<(EventSummary, Vec<EventSample>)> {
    if num_events <= 0 {
        return Err(PhysicsError::validation(format!(
            "num_events must be positive, got {num_events}"
        )));
    }

    let generator = EventGenerator::new(params)?;
    let seed = resolve_seed(seed);
    debug!(num_events, seed, "generating events");

    Ok(generator.run(num_events as u64, seed, keep))
}
