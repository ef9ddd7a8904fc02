//! Closed-form Rutherford deflection.
//!
//! The analytic counterpart of the numeric estimator, for a projectile
//! arriving from infinity: θ(b) = 2·atan(k·Z1·Z2·e² / (2·E·b)). Exposed for
//! cross-checking simulated batches against theory. Note the simulated
//! launch point sits at a finite distance, so numeric angles run somewhat
//! hotter than this prediction.

use crate::units::{COULOMB_CONSTANT, ELEMENTARY_CHARGE};

/// Analytic scattering angle in radians for impact parameter `b` (m) and
/// kinetic energy `energy` (J).
///
/// `b = 0` maps through `atan(∞)` to π, the head-on reversal. A signed `b`
/// yields a signed angle; callers interested in magnitude take `abs()`.
pub fn analytic_scattering_angle(z1: u32, z2: u32, energy: f64, impact: f64) -> f64 {
    let half_tangent =
        COULOMB_CONSTANT * f64::from(z1) * f64::from(z2) * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE
            / (2.0 * energy * impact);
    2.0 * half_tangent.atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FEMTOMETER, MEV};
    use std::f64::consts::PI;

    #[test]
    fn head_on_reverses() {
        let angle = analytic_scattering_angle(2, 79, 5.0 * MEV, 0.0);
        assert!((angle - PI).abs() < 1e-15, "b = 0 must give π, got {}", angle);
    }

    #[test]
    fn angle_decreases_with_impact_parameter() {
        let energy = 5.0 * MEV;
        let mut previous = PI;
        for b_fm in [1.0, 5.0, 20.0, 100.0] {
            let angle = analytic_scattering_angle(2, 79, energy, b_fm * FEMTOMETER);
            assert!(angle > 0.0);
            assert!(angle < previous, "θ must fall as b grows");
            previous = angle;
        }
    }

    #[test]
    fn angle_decreases_with_energy() {
        let b = 10.0 * FEMTOMETER;
        let slow = analytic_scattering_angle(2, 79, 1.0 * MEV, b);
        let fast = analytic_scattering_angle(2, 79, 10.0 * MEV, b);
        assert!(fast < slow, "faster projectiles deflect less");
    }

    #[test]
    fn distant_passes_approach_the_small_angle_limit() {
        let energy = 5.0 * MEV;
        let b = 1.0e4 * FEMTOMETER;
        let angle = analytic_scattering_angle(2, 79, energy, b);
        let small_angle = COULOMB_CONSTANT * 2.0 * 79.0 * ELEMENTARY_CHARGE * ELEMENTARY_CHARGE
            / (energy * b);
        assert!((angle - small_angle).abs() / small_angle < 1e-3);
    }
}
