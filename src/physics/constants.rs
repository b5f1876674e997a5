//! Physical constants (CODATA 2018 / PDG).
//!
//! Masses are given in MeV/c² unless the name says otherwise.

use serde::Serialize;

/// Energy equivalent of one atomic mass unit, in MeV.
pub const MEV_PER_U: f64 = 931.494;

/// Proton mass in atomic mass units.
pub const PROTON_MASS_U: f64 = 1.007_276_466_621;

/// Neutron mass in atomic mass units.
pub const NEUTRON_MASS_U: f64 = 1.008_664_915_95;

/// Electron mass in atomic mass units.
pub const ELECTRON_MASS_U: f64 = 0.000_548_579_909_065;

/// Binding energies more negative than this (MeV) are rejected.
pub const BINDING_ENERGY_TOLERANCE_MEV: f64 = 1e-6;

/// Lower edge of the momentum-fraction support used for event generation.
pub const X_MIN: f64 = 0.1;

/// Upper edge of the momentum-fraction support.
pub const X_MAX: f64 = 1.0;

/// Snapshot of the constants, served as a resource.
#[derive(Debug, Clone, Serialize)]
pub struct ConstantsTable {
    pub mev_per_u: f64,
    pub proton_mass_u: f64,
    pub neutron_mass_u: f64,
    pub electron_mass_u: f64,
    pub binding_energy_tolerance_mev: f64,
    pub momentum_fraction_support: [f64; 2],
}

/// Collect the constants into a serializable table.
pub fn constants_table() -> ConstantsTable {
    ConstantsTable {
        mev_per_u: MEV_PER_U,
        proton_mass_u: PROTON_MASS_U,
        neutron_mass_u: NEUTRON_MASS_U,
        electron_mass_u: ELECTRON_MASS_U,
        binding_energy_tolerance_mev: BINDING_ENERGY_TOLERANCE_MEV,
        momentum_fraction_support: [X_MIN, X_MAX],
    }
}
