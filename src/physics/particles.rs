//! Static particle property table.
//!
//! The table is a compile-time constant shared read-only by every caller.
//! Lookups are case-insensitive exact matches on the particle name.

use serde::{Serialize, Serializer};

use super::error::{PhysicsError, PhysicsResult};

/// Properties of a single particle species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleRecord {
    /// Canonical (lower-case) name.
    pub name: &'static str,

    /// Rest mass in MeV/c².
    #[serde(rename = "mass_MeV")]
    pub mass_mev: f64,

    /// Electric charge in units of e.
    pub charge: i32,

    /// Mean lifetime in seconds; `f64::INFINITY` for stable particles.
    #[serde(serialize_with = "serialize_lifetime")]
    pub lifetime_s: f64,

    /// Twice the spin, so half-integer spins stay exact.
    #[serde(skip)]
    pub twice_spin: u8,
}

impl ParticleRecord {
    /// Spin quantum number (a non-negative multiple of 1/2).
    pub fn spin(&self) -> f64 {
        f64::from(self.twice_spin) / 2.0
    }

    /// Whether the particle is stable (infinite lifetime).
    pub fn is_stable(&self) -> bool {
        self.lifetime_s.is_infinite()
    }

    /// Whether the particle is a fermion (half-integer spin).
    pub fn is_fermion(&self) -> bool {
        self.twice_spin % 2 == 1
    }

    /// JSON view including the derived fields.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "mass_MeV": self.mass_mev,
            "charge": self.charge,
            "lifetime_s": if self.is_stable() { None } else { Some(self.lifetime_s) },
            "stable": self.is_stable(),
            "spin": self.spin(),
        })
    }
}

fn serialize_lifetime<S: Serializer>(lifetime: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if lifetime.is_finite() {
        serializer.serialize_some(lifetime)
    } else {
        serializer.serialize_none()
    }
}

const fn particle(
    name: &'static str,
    mass_mev: f64,
    charge: i32,
    lifetime_s: f64,
    twice_spin: u8,
) -> ParticleRecord {
    ParticleRecord {
        name,
        mass_mev,
        charge,
        lifetime_s,
        twice_spin,
    }
}

/// PDG values.
static PARTICLES: [ParticleRecord; 10] = [
    particle("electron", 0.51099895, -1, f64::INFINITY, 1),
    particle("proton", 938.272088, 1, f64::INFINITY, 1),
    particle("neutron", 939.565413, 0, 879.4, 1),
    particle("muon", 105.6583755, -1, 2.1969811e-6, 1),
    particle("tau", 1776.86, -1, 2.903e-13, 1),
    particle("pion0", 134.9768, 0, 8.52e-17, 0),
    particle("pion+", 139.57039, 1, 2.6033e-8, 0),
    particle("pion-", 139.57039, -1, 2.6033e-8, 0),
    particle("kaon+", 493.677, 1, 1.2380e-8, 0),
    particle("kaon-", 493.677, -1, 1.2380e-8, 0),
];

/// Every particle in the table, in table order.
pub fn all_particles() -> &'static [ParticleRecord] {
    &PARTICLES
}

/// Names of every particle in the table, in table order.
pub fn particle_names() -> Vec<&'static str> {
    PARTICLES.iter().map(|p| p.name).collect()
}

/// Look up a particle by name (case-insensitive).
///
/// # Errors
///
/// Returns [`PhysicsError::NotFound`] carrying every known name when there
/// is no match, so that callers can correct the request.
pub fn get_particle_properties(name: &str) -> PhysicsResult<&'static ParticleRecord> {
    PARTICLES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| PhysicsError::not_found(name, particle_names()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muon_properties() {
        let muon = get_particle_properties("muon").unwrap();
        assert!((muon.mass_mev - 105.658).abs() < 1e-3);
        assert_eq!(muon.charge, -1);
        assert!((muon.lifetime_s - 2.1970e-6).abs() < 1e-9);
        assert_eq!(muon.spin(), 0.5);
        assert!(muon.is_fermion());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let a = get_particle_properties("PROTON").unwrap();
        let b = get_particle_properties("Proton").unwrap();
        assert_eq!(a, b);
        assert_eq!(get_particle_properties("Pion+").unwrap().charge, 1);
    }

    #[test]
    fn test_unknown_particle_lists_known_names() {
        match get_particle_properties("graviton") {
            Err(PhysicsError::NotFound { name, known }) => {
                assert_eq!(name, "graviton");
                assert!(known.contains(&"electron".to_string()));
                assert!(known.contains(&"pion0".to_string()));
                assert_eq!(known.len(), all_particles().len());
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_table_invariants() {
        for p in all_particles() {
            assert!(p.mass_mev > 0.0, "{} has non-positive mass", p.name);
            assert!(p.lifetime_s > 0.0, "{} has non-positive lifetime", p.name);
            assert_eq!(p.name, p.name.to_lowercase());
        }
        let required = ["electron", "proton", "neutron", "muon", "pion0", "pion+"];
        for name in required {
            assert!(get_particle_properties(name).is_ok(), "missing {name}");
        }
    }

    #[test]
    fn test_stable_particle_serializes_null_lifetime() {
        let electron = get_particle_properties("electron").unwrap();
        let json = serde_json::to_value(electron).unwrap();
        assert!(json["lifetime_s"].is_null());

        let view = electron.to_json();
        assert_eq!(view["stable"], serde_json::json!(true));
        assert_eq!(view["spin"], serde_json::json!(0.5));
    }
}
