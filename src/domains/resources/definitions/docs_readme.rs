//! Documentation readme resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Server documentation resource (static Markdown).
pub struct DocsReadmeResource;

impl ResourceDefinition for DocsReadmeResource {
    const URI: &'static str = "mcp://server/docs/readme";
    const NAME: &'static str = "Server Documentation";
    const DESCRIPTION: &'static str = "Guide to the physics tools, resources and prompts";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(DOCUMENTATION.to_string())
    }
}

const DOCUMENTATION: &str = r#"# Physics MCP Server

Particle and nuclear physics calculations for agents. Units are fixed:
masses, momenta and energies in MeV (c = 1), times in seconds, isotope
masses in u, momentum fractions x dimensionless.

## Available Tools

- `calculate_relativistic_energy`: E = sqrt(m² + p²) from `mass_mev`, `momentum_mev`
- `calculate_lorentz_factor`: γ = 1/sqrt(1 - v²) from `velocity_fraction` (|v| < 1)
- `calculate_decay_probability`: P = 1 - exp(-t/τ) from `lifetime_s`, `time_s`
- `calculate_binding_energy`: binding energy from `isotope_mass_u`, `num_protons`, `num_neutrons`
- `get_particle_properties`: mass, charge, lifetime and spin by `particle_name`
- `list_particles`: the full particle table
- `generate_physics_events`: toy events from the quark model (`num_events`, `truth_params`, `seed`, `include_samples`)
- `visualize_quark_distributions`: u, d, u/d, σ1, σ2 and σ1/σ2 series (`truth_params`, `points`)
- `search_knowledge_base`: keyword search over loaded documents (`query`, `max_chars`)
- `load_documents`: load .pdf, .txt and .md files from `directory`

Quark model parameters are `[u_a, u_b, u_p, d_a, d_b, d_q]` with
u(x) = u_p·x^u_a·(1-x)^u_b and d(x) = d_q·x^d_a·(1-x)^d_b, default
`[-0.4, 2.4, 0.5, -0.06, 0.4, 0.48]`.

## Available Resources

- `physics://particles`: the particle table (JSON)
- `physics://particles/{name}`: one particle (JSON)
- `physics://constants`: constants used by the calculations (JSON)
- `mcp://server/info`: server and knowledge-base information
- `mcp://server/docs/readme`: this documentation

## Available Prompts

- `physics_assistant`: general physics assistant (optional `focus`)
- `explain_concept`: explain a physics concept (`topic`, optional `level`)
- `particle_analysis`: analyze a particle's kinematics (`particle`, optional `momentum_mev`)
- `event_study`: study generated events (optional `num_events`, `seed`)
"#;
