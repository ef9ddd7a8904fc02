//! Coulomb force evaluation for the projectile.
//!
//! The target nucleus sits fixed at the origin and the projectile feels a
//! purely repulsive inverse-square force. Numerically degenerate inputs
//! collapse to zero acceleration rather than propagating NaN or infinity
//! into the trajectory.

use crate::config;
use crate::units::{COULOMB_CONSTANT, ELEMENTARY_CHARGE};
use ultraviolet::DVec2;

/// Instantaneous acceleration of the projectile at `pos`.
///
/// F = k·Z1·Z2·e²/r², directed radially outward, divided by the projectile
/// mass. Returns zero for non-finite inputs, non-positive mass, positions
/// inside the singularity floor, or any non-finite intermediate value.
pub fn coulomb_acceleration(pos: DVec2, z1: u32, z2: u32, mass: f64) -> DVec2 {
    if !pos.x.is_finite() || !pos.y.is_finite() || !mass.is_finite() || mass <= 0.0 {
        return DVec2::zero();
    }

    let r2 = pos.mag_sq();
    if r2 < config::SINGULARITY_R2_FLOOR {
        return DVec2::zero();
    }

    let r = r2.sqrt();
    if !r.is_finite() || r <= 0.0 {
        return DVec2::zero();
    }

    let force_mag =
        COULOMB_CONSTANT * f64::from(z1) * f64::from(z2) * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE
            / r2;
    if !force_mag.is_finite() {
        return DVec2::zero();
    }

    // a = F/m, along the outward radial direction
    let acc = pos * (force_mag / (r * mass));
    if !acc.x.is_finite() || !acc.y.is_finite() {
        return DVec2::zero();
    }
    acc
}
