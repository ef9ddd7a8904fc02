//! Fixed-step trajectory integration for a single projectile.
//!
//! Symplectic-Euler ordering: velocity is updated from the current
//! acceleration first, then position from the updated velocity. The
//! ordering is load-bearing for trajectory shape and must not be swapped
//! for full-implicit or Runge-Kutta variants.

use crate::config::PhysicalParameters;
use crate::particle::{InitialConditions, ProjectileState};
use ultraviolet::DVec2;

use super::forces;

/// Integrate one projectile from its launch state until it terminates.
///
/// Termination conditions, checked each step in order:
/// non-finite acceleration, non-finite velocity, non-finite position,
/// escape past `escape_distance` (point kept), approach inside
/// `min_distance` (point kept), step budget exhausted. No terminal state
/// is an error; callers treat trajectories shorter than two points as
/// "no measurable scattering".
pub fn integrate_trajectory(
    params: &PhysicalParameters,
    initial: &InitialConditions,
) -> Vec<DVec2> {
    let mut state = ProjectileState {
        pos: initial.pos,
        vel: initial.vel,
    };
    let mut trajectory = Vec::new();

    for _ in 0..params.max_steps {
        let acc = forces::coulomb_acceleration(state.pos, params.z1, params.z2, params.mass);
        if !acc.x.is_finite() || !acc.y.is_finite() {
            break;
        }

        state.vel += acc * params.dt;
        if !state.vel.x.is_finite() || !state.vel.y.is_finite() {
            break;
        }

        state.pos += state.vel * params.dt;
        if !state.pos.x.is_finite() || !state.pos.y.is_finite() {
            break;
        }

        trajectory.push(state.pos);

        let distance = state.pos.mag();
        if distance > params.escape_distance {
            // Left the interaction zone
            break;
        }
        if distance < params.min_distance {
            // Too close to the singularity
            break;
        }
    }

    trajectory
}
