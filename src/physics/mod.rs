//! Particle and nuclear physics calculations.
//!
//! Everything here is synchronous and free of shared state: the particle
//! table is static and every event-generation run owns its RNG. Units are
//! fixed throughout (MeV, seconds, atomic mass units, dimensionless x).

pub mod constants;
pub mod error;
pub mod events;
pub mod kinematics;
pub mod particles;
pub mod quark;
pub mod sampling;
pub mod series;

pub use constants::{ConstantsTable, constants_table};
pub use error::{PhysicsError, PhysicsResult};
pub use events::{
    Channel, ChannelStatistics, DEFAULT_NUM_EVENTS, EventGenerator, EventSample, EventSummary,
    generate_events, generate_events_with_samples,
};
pub use kinematics::{
    binding_energy, binding_energy_per_nucleon, decay_probability, kinetic_energy,
    lorentz_factor, relativistic_energy,
};
pub use particles::{ParticleRecord, all_particles, get_particle_properties, particle_names};
pub use quark::{DEFAULT_TRUTH_PARAMS, QuarkDistributionParams};
pub use sampling::InverseCdfSampler;
pub use series::{DEFAULT_SERIES_POINTS, DistributionSeries, quark_distribution_series};
