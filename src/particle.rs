// particle.rs
// Projectile state, launch conditions, and the per-run record type

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

/// Mutable cursor for one projectile while it is being integrated.
/// Owned by a single integrator run, never shared between particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileState {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Launch state produced by the initial-condition generator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Sampled perpendicular offset of the approach path in m.
    pub impact_parameter: f64,
}

/// Everything recorded about one simulated projectile. Assembled once per
/// run and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleRecord {
    pub id: u64,
    pub initial: InitialConditions,
    /// Ordered positions visited during integration, length ≤ max_steps.
    pub trajectory: Vec<DVec2>,
    /// Net deflection angle in radians, in [0, π].
    pub scattering_angle: f64,
    /// Last trajectory point, `None` when the run terminated immediately.
    pub final_position: Option<DVec2>,
}
