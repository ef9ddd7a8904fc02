//! Impact-parameter sampling and launch-state construction.

use crate::config::{self, PhysicalParameters};
use crate::particle::InitialConditions;
use rand::Rng;
use ultraviolet::DVec2;

/// Draw one impact parameter uniformly from the signed interval
/// [-b_max, +b_max].
///
/// Linear sampling over the offset, not area-uniform sampling over a disk.
/// The affine form keeps degenerate `b_max` values (zero, negative,
/// non-finite) from panicking; they flow into the launch state and are
/// absorbed by the integrator guards.
pub fn sample_impact_parameter<R: Rng + ?Sized>(rng: &mut R, b_max: f64) -> f64 {
    rng.random::<f64>() * 2.0 * b_max - b_max
}

/// Build the launch state for one projectile: sampled offset along y,
/// fixed launch distance upstream on -x, speed from E = m·v²/2 pointing
/// along +x.
///
/// Non-positive energy or mass makes `v0` non-finite on purpose; the
/// integrator's finite-value guards terminate such runs immediately.
pub fn generate_initial_conditions<R: Rng + ?Sized>(
    rng: &mut R,
    params: &PhysicalParameters,
) -> InitialConditions {
    let b = sample_impact_parameter(rng, params.max_impact_parameter);
    let v0 = (2.0 * params.energy / params.mass).sqrt();
    InitialConditions {
        pos: DVec2::new(-config::LAUNCH_DISTANCE, b),
        vel: DVec2::new(v0, 0.0),
        impact_parameter: b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::FEMTOMETER;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_inside_signed_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let b_max = 30.0 * FEMTOMETER;
        for _ in 0..10_000 {
            let b = sample_impact_parameter(&mut rng, b_max);
            assert!(b >= -b_max && b <= b_max, "sample {} escaped the interval", b);
        }
    }

    #[test]
    fn samples_cover_both_signs() {
        let mut rng = StdRng::seed_from_u64(11);
        let b_max = 30.0 * FEMTOMETER;
        let mut negatives = 0usize;
        let mut positives = 0usize;
        for _ in 0..1_000 {
            if sample_impact_parameter(&mut rng, b_max) < 0.0 {
                negatives += 1;
            } else {
                positives += 1;
            }
        }
        assert!(negatives > 300 && positives > 300, "uniform sampling should land on both signs");
    }

    #[test]
    fn degenerate_b_max_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_impact_parameter(&mut rng, 0.0), 0.0);
        let b = sample_impact_parameter(&mut rng, -1.0e-14);
        assert!(b.abs() <= 1.0e-14);
        assert!(sample_impact_parameter(&mut rng, f64::NAN).is_nan());
    }

    #[test]
    fn launch_state_matches_kinetic_energy() {
        let params = crate::config::PhysicalParameters::default();
        let mut rng = StdRng::seed_from_u64(42);
        let initial = generate_initial_conditions(&mut rng, &params);

        let expected_v0 = (2.0 * params.energy / params.mass).sqrt();
        assert_eq!(initial.vel.x, expected_v0);
        assert_eq!(initial.vel.y, 0.0);
        assert_eq!(initial.pos.x, -crate::config::LAUNCH_DISTANCE);
        assert_eq!(initial.pos.y, initial.impact_parameter);
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let params = crate::config::PhysicalParameters::default();
        let a = generate_initial_conditions(&mut StdRng::seed_from_u64(5), &params);
        let b = generate_initial_conditions(&mut StdRng::seed_from_u64(5), &params);
        assert_eq!(a, b);
    }

    #[test]
    fn negative_energy_propagates_as_non_finite_speed() {
        let mut params = crate::config::PhysicalParameters::default();
        params.energy = -1.0;
        let initial = generate_initial_conditions(&mut StdRng::seed_from_u64(1), &params);
        assert!(initial.vel.x.is_nan(), "bad energy must surface as a NaN launch speed");
    }
}
