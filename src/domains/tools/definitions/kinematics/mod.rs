//! Relativistic kinematics and nuclear calculation tools.

pub mod binding_energy;
pub mod decay_probability;
pub mod lorentz_factor;
pub mod relativistic_energy;

pub use binding_energy::{BindingEnergyParams, BindingEnergyTool};
pub use decay_probability::{DecayProbabilityParams, DecayProbabilityTool};
pub use lorentz_factor::{LorentzFactorParams, LorentzFactorTool};
pub use relativistic_energy::{RelativisticEnergyParams, RelativisticEnergyTool};
