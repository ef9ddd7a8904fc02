//! Derived measurements over completed trajectories.
//!
//! The scattering angle compares the fixed +x launch direction with the
//! net start-to-end displacement; batch statistics summarize the angle set
//! of one run. Both absorb degenerate inputs instead of raising.

use crate::config;
use crate::particle::ParticleRecord;
use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

/// Net deflection angle of a trajectory in radians, in [0, π].
///
/// Trajectories with fewer than two points, or whose endpoints nearly
/// coincide, have no usable direction and return 0.
pub fn scattering_angle(trajectory: &[DVec2]) -> f64 {
    if trajectory.len() < 2 {
        return 0.0;
    }
    let start = trajectory[0];
    let end = trajectory[trajectory.len() - 1];

    let displacement = end - start;
    let dist = displacement.mag();
    if dist < config::MIN_DEFLECTION_DISPLACEMENT {
        return 0.0;
    }

    // Dot with the (1, 0) launch direction; clamp against rounding drift
    // outside the acos domain.
    let cos_theta = (displacement.x / dist).clamp(-1.0, 1.0);
    cos_theta.acos()
}

/// Aggregate angle statistics for one batch, recomputed wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean_angle: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub particle_count: usize,
}

impl StatisticsSummary {
    /// Summarize the records' scattering angles. An empty batch yields a
    /// zeroed summary rather than NaN extrema.
    pub fn from_records(records: &[ParticleRecord]) -> Self {
        if records.is_empty() {
            return Self {
                mean_angle: 0.0,
                std_dev: 0.0,
                min_angle: 0.0,
                max_angle: 0.0,
                particle_count: 0,
            };
        }

        let n = records.len() as f64;
        let mean_angle = records.iter().map(|r| r.scattering_angle).sum::<f64>() / n;
        let variance = records
            .iter()
            .map(|r| {
                let d = r.scattering_angle - mean_angle;
                d * d
            })
            .sum::<f64>()
            / n;

        let mut min_angle = f64::INFINITY;
        let mut max_angle = f64::NEG_INFINITY;
        for record in records {
            min_angle = min_angle.min(record.scattering_angle);
            max_angle = max_angle.max(record.scattering_angle);
        }

        Self {
            mean_angle,
            std_dev: variance.sqrt(),
            min_angle,
            max_angle,
            particle_count: records.len(),
        }
    }
}
