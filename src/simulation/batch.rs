//! Batch driver: N independent projectile runs plus aggregation.
//!
//! Each particle's pipeline (launch state → trajectory → angle) is a pure
//! computation over private state, so the batch maps over particle indices
//! in parallel and collects records in index order.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{integrator, sampling};
use crate::config::PhysicalParameters;
use crate::diagnostics::{self, StatisticsSummary};
use crate::particle::ParticleRecord;
use crate::profile_scope;

/// One whole batch: inputs, per-particle records, aggregate statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub params: PhysicalParameters,
    pub seed: u64,
    pub particles: Vec<ParticleRecord>,
    pub statistics: StatisticsSummary,
}

/// Runs a configured number of independent projectile simulations.
pub struct BatchRunner {
    params: PhysicalParameters,
    particle_count: usize,
    seed: u64,
}

impl BatchRunner {
    pub fn new(params: PhysicalParameters, particle_count: usize, seed: u64) -> Self {
        Self {
            params,
            particle_count,
            seed,
        }
    }

    /// Run the full batch.
    pub fn run(&self) -> BatchResult {
        self.run_cancellable(&AtomicBool::new(false))
    }

    /// Run the batch, checking `cancel` once per particle, never
    /// mid-trajectory. Cancelled indices produce no record; the surviving
    /// records stay in id order and feed the statistics pass as usual.
    pub fn run_cancellable(&self, cancel: &AtomicBool) -> BatchResult {
        profile_scope!("batch_run");
        let params = self.params;
        let seed = self.seed;

        let particles: Vec<ParticleRecord> = (0..self.particle_count as u64)
            .into_par_iter()
            .filter_map(|id| {
                if cancel.load(Ordering::Relaxed) {
                    return None;
                }
                Some(Self::simulate_particle(&params, seed, id))
            })
            .collect();

        let statistics = StatisticsSummary::from_records(&particles);
        BatchResult {
            params,
            seed,
            particles,
            statistics,
        }
    }

    /// One full pipeline pass for a single particle.
    ///
    /// The particle owns an rng derived from the batch seed and its index,
    /// so results are bit-identical regardless of thread scheduling.
    fn simulate_particle(params: &PhysicalParameters, seed: u64, id: u64) -> ParticleRecord {
        let mut rng = StdRng::seed_from_u64(seed ^ id.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let initial = sampling::generate_initial_conditions(&mut rng, params);
        let trajectory = integrator::integrate_trajectory(params, &initial);
        let scattering_angle = diagnostics::scattering_angle(&trajectory);
        let final_position = trajectory.last().copied();

        ParticleRecord {
            id,
            initial,
            trajectory,
            scattering_angle,
            final_position,
        }
    }
}
