//! Particle table tools.

pub mod list;
pub mod properties;

pub use list::{ListParticlesParams, ListParticlesTool};
pub use properties::{ParticlePropertiesParams, ParticlePropertiesTool};

use crate::physics::ParticleRecord;

/// One-line human-readable summary of a particle.
pub(crate) fn describe_particle(p: &ParticleRecord) -> String {
    let lifetime = if p.is_stable() {
        "stable".to_string()
    } else {
        format!("τ = {:e} s", p.lifetime_s)
    };
    format!(
        "{}: m = {} MeV/c², q = {:+}e, spin {}, {}",
        p.name,
        p.mass_mev,
        p.charge,
        p.spin(),
        lifetime
    )
}
