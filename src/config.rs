// Centralized configuration for the scattering engine

use crate::units;
use serde::{Deserialize, Serialize};

// ====================
// Numerical Guards
// ====================
/// Squared distance below which the Coulomb force is treated as singular
/// and collapses to zero acceleration.
pub const SINGULARITY_R2_FLOOR: f64 = 1e-30;
/// Start-to-end displacement below which a trajectory has no usable
/// direction and scatters by definition not at all.
pub const MIN_DEFLECTION_DISPLACEMENT: f64 = 1e-20;

// ====================
// Launch Geometry
// ====================
/// Launch distance of the projectile upstream of the target along -x.
/// Chosen for the MeV-alpha-on-gold regime; it is not derived from the
/// physical parameters and can clip trajectories for exotic combinations.
pub const LAUNCH_DISTANCE: f64 = 50.0 * units::FEMTOMETER;

// ====================
// Simulation Defaults
// ====================
/// Default integration timestep in seconds.
pub const DEFAULT_DT: f64 = 1e-22;
/// Default step budget per trajectory.
pub const DEFAULT_MAX_STEPS: usize = 10_000;
/// Default minimum-approach distance in meters; closer runs stop to avoid
/// the singularity.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-18;
/// Default escape distance in meters; farther runs have left the
/// interaction zone.
pub const DEFAULT_ESCAPE_DISTANCE: f64 = 100.0 * units::FEMTOMETER;
/// Default maximum impact parameter in meters.
pub const DEFAULT_MAX_IMPACT_PARAMETER: f64 = 30.0 * units::FEMTOMETER;
/// Default projectile kinetic energy: a 5 MeV alpha particle.
pub const DEFAULT_ENERGY: f64 = 5.0 * units::MEV;
/// Default number of projectiles per batch.
pub const DEFAULT_PARTICLE_COUNT: usize = 100;
/// Default batch seed.
pub const DEFAULT_SEED: u64 = 0;

/// Immutable physical input bundle for one batch.
///
/// Fields are not validated up front: non-positive or non-finite values
/// propagate into non-finite derived quantities, which the force and
/// integrator guards absorb as degenerate (empty or near-empty)
/// trajectories instead of raising.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Projectile atomic number.
    pub z1: u32,
    /// Target atomic number.
    pub z2: u32,
    /// Projectile mass in kg.
    pub mass: f64,
    /// Projectile kinetic energy in J.
    pub energy: f64,
    /// Half-width of the sampled impact-parameter interval in m.
    pub max_impact_parameter: f64,
    /// Integration timestep in s.
    pub dt: f64,
    /// Step budget per trajectory.
    pub max_steps: usize,
    /// Minimum-approach distance in m.
    pub min_distance: f64,
    /// Escape distance in m.
    pub escape_distance: f64,
}

impl Default for PhysicalParameters {
    /// Reference scenario: alpha particles on a gold nucleus.
    fn default() -> Self {
        Self {
            z1: 2,
            z2: 79,
            mass: units::ALPHA_PARTICLE_MASS,
            energy: DEFAULT_ENERGY,
            max_impact_parameter: DEFAULT_MAX_IMPACT_PARAMETER,
            dt: DEFAULT_DT,
            max_steps: DEFAULT_MAX_STEPS,
            min_distance: DEFAULT_MIN_DISTANCE,
            escape_distance: DEFAULT_ESCAPE_DISTANCE,
        }
    }
}
