//! Closed-form relativistic kinematics and nuclear formulas.
//!
//! All functions work in natural units: masses, momenta and energies are in
//! MeV (with c = 1), lifetimes and times in seconds, isotope masses in u.
//!
//! Domain boundaries are exclusive where the formula degenerates: a velocity
//! fraction of exactly ±1 is rejected, while a mass of exactly 0 is accepted
//! (massless particles have E = p).

use tracing::debug;

use super::constants::{
    BINDING_ENERGY_TOLERANCE_MEV, ELECTRON_MASS_U, MEV_PER_U, NEUTRON_MASS_U, PROTON_MASS_U,
};
use super::error::{PhysicsError, PhysicsResult, ensure_finite, ensure_non_negative};

/// Total energy `E = sqrt(m² + p²)` of a particle.
///
/// # Errors
///
/// Returns [`PhysicsError::Validation`] if either input is negative or not finite.
pub fn relativistic_energy(mass_mev: f64, momentum_mev: f64) -> PhysicsResult<f64> {
    let mass = ensure_non_negative("mass", mass_mev)?;
    let momentum = ensure_non_negative("momentum", momentum_mev)?;
    Ok(mass.hypot(momentum))
}

/// Kinetic energy `T = E - m`.
pub fn kinetic_energy(mass_mev: f64, momentum_mev: f64) -> PhysicsResult<f64> {
    let energy = relativistic_energy(mass_mev, momentum_mev)?;
    Ok(energy - mass_mev)
}

/// Lorentz factor `γ = 1 / sqrt(1 - v²)` for a velocity given as a fraction of c.
///
/// # Errors
///
/// Returns [`PhysicsError::Validation`] when `|v| >= 1` or `v` is not finite.
pub fn lorentz_factor(velocity_fraction: f64) -> PhysicsResult<f64> {
    let v = ensure_finite("velocity_fraction", velocity_fraction)?;
    if v.abs() >= 1.0 {
        return Err(PhysicsError::validation(format!(
            "velocity_fraction {v} is out of physical range: |v| must be less than 1 (speed of light)"
        )));
    }

    let gamma = (1.0 - v * v).sqrt().recip();
    if !gamma.is_finite() {
        return Err(PhysicsError::inconsistent(format!(
            "Lorentz factor overflowed for velocity_fraction {v}"
        )));
    }
    Ok(gamma)
}

/// Probability that a particle with mean lifetime `τ` has decayed after `t`:
/// `P = 1 - exp(-t/τ)`.
///
/// An infinite lifetime (stable particle) yields 0.
///
/// # Errors
///
/// Returns [`PhysicsError::Validation`] for a non-positive lifetime or a
/// negative / non-finite elapsed time.
pub fn decay_probability(lifetime_s: f64, elapsed_s: f64) -> PhysicsResult<f64> {
    if lifetime_s.is_nan() || lifetime_s <= 0.0 {
        return Err(PhysicsError::validation(format!(
            "lifetime must be positive, got {lifetime_s}"
        )));
    }
    let elapsed = ensure_non_negative("elapsed time", elapsed_s)?;

    // expm1 keeps precision when t << τ
    Ok(-(-elapsed / lifetime_s).exp_m1())
}

/// Nuclear binding energy in MeV from a measured isotope (atomic) mass.
///
/// The mass defect is `Z·(m_p + m_e) + N·m_n - M`; the electron term accounts
/// for atomic masses including the electron cloud.
///
/// # Errors
///
/// - [`PhysicsError::Validation`] for negative nucleon counts, an empty
///   nucleus, a mass number beyond `u32`, or a non-positive isotope mass.
/// - [`PhysicsError::NumericalInconsistency`] when the resulting binding
///   energy is negative beyond a small tolerance.
pub fn binding_energy(isotope_mass_u: f64, protons: i64, neutrons: i64) -> PhysicsResult<f64> {
    let mass = ensure_finite("isotope mass", isotope_mass_u)?;
    if mass <= 0.0 {
        return Err(PhysicsError::validation(format!(
            "isotope mass must be positive, got {mass}"
        )));
    }
    if protons < 0 || neutrons < 0 {
        return Err(PhysicsError::validation(format!(
            "nucleon counts must be non-negative, got Z={protons}, N={neutrons}"
        )));
    }
    nucleon_count(protons, neutrons)?;

    let constituents =
        protons as f64 * (PROTON_MASS_U + ELECTRON_MASS_U) + neutrons as f64 * NEUTRON_MASS_U;
    let mass_defect = constituents - mass;
    let energy = mass_defect * MEV_PER_U;
    debug!(mass_defect, energy, "computed binding energy");

    if energy < -BINDING_ENERGY_TOLERANCE_MEV {
        return Err(PhysicsError::inconsistent(format!(
            "binding energy {energy:.6} MeV is negative for Z={protons}, N={neutrons}, M={mass} u; \
             the isotope mass is larger than its constituents"
        )));
    }
    Ok(energy.max(0.0))
}

/// Binding energy per nucleon in MeV.
pub fn binding_energy_per_nucleon(
    isotope_mass_u: f64,
    protons: i64,
    neutrons: i64,
) -> PhysicsResult<f64> {
    let energy = binding_energy(isotope_mass_u, protons, neutrons)?;
    Ok(energy / f64::from(nucleon_count(protons, neutrons)?))
}

/// Mass number A = Z + N of a non-empty nucleus.
fn nucleon_count(protons: i64, neutrons: i64) -> PhysicsResult<u32> {
    let total = protons
        .checked_add(neutrons)
        .and_then(|a| u32::try_from(a).ok())
        .ok_or_else(|| {
            PhysicsError::validation(format!(
                "nucleon count Z + N is out of range for Z={protons}, N={neutrons}"
            ))
        })?;
    if total == 0 {
        return Err(PhysicsError::validation(
            "a nucleus needs at least one nucleon",
        ));
    }
    Ok(total)
}
