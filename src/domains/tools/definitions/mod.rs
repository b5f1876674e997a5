//! Tool definitions module.
//!
//! One file per tool, grouped by subject. Every tool implements
//! [`ToolDefinition`](common::ToolDefinition).

pub mod common;
pub mod events;
pub mod kinematics;
pub mod knowledge;
pub mod particles;

pub use common::ToolDefinition;
pub use events::{GenerateEventsTool, VisualizeDistributionsTool};
pub use kinematics::{
    BindingEnergyTool, DecayProbabilityTool, LorentzFactorTool, RelativisticEnergyTool,
};
pub use knowledge::{LoadDocumentsTool, SearchKnowledgeTool};
pub use particles::{ListParticlesTool, ParticlePropertiesTool};
