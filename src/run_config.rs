// run_config.rs
// Handles loading and parsing the run configuration from a TOML file

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{self, PhysicalParameters};

/// Default configuration filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "scatter_config.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RunConfig {
    pub run: Option<RunSection>,
    pub physics: Option<PhysicsSection>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RunSection {
    /// Number of projectiles per batch. Falls back to the default when omitted.
    pub particle_count: Option<usize>,
    /// Batch seed for reproducible sampling.
    pub seed: Option<u64>,
    /// Directory for CSV/JSON outputs.
    pub output_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PhysicsSection {
    pub z1: Option<u32>,
    pub z2: Option<u32>,
    /// Projectile mass in kg.
    pub mass: Option<f64>,
    /// Kinetic energy in J.
    pub energy: Option<f64>,
    /// Half-width of the impact-parameter interval in m.
    pub max_impact_parameter: Option<f64>,
    /// Timestep in s.
    pub dt: Option<f64>,
    pub max_steps: Option<usize>,
    /// Minimum-approach threshold in m.
    pub min_distance: Option<f64>,
    /// Escape threshold in m.
    pub escape_distance: Option<f64>,
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }

    pub fn particle_count(&self) -> usize {
        self.run
            .as_ref()
            .and_then(|r| r.particle_count)
            .unwrap_or(config::DEFAULT_PARTICLE_COUNT)
    }

    pub fn seed(&self) -> u64 {
        self.run
            .as_ref()
            .and_then(|r| r.seed)
            .unwrap_or(config::DEFAULT_SEED)
    }

    pub fn output_dir(&self) -> String {
        self.run
            .as_ref()
            .and_then(|r| r.output_dir.clone())
            .unwrap_or_else(|| "scatter_results".to_string())
    }

    /// Resolve the physics section into a complete parameter bundle, using
    /// the engine defaults for anything omitted.
    pub fn physical_parameters(&self) -> PhysicalParameters {
        let defaults = PhysicalParameters::default();
        let Some(physics) = self.physics.as_ref() else {
            return defaults;
        };
        PhysicalParameters {
            z1: physics.z1.unwrap_or(defaults.z1),
            z2: physics.z2.unwrap_or(defaults.z2),
            mass: physics.mass.unwrap_or(defaults.mass),
            energy: physics.energy.unwrap_or(defaults.energy),
            max_impact_parameter: physics
                .max_impact_parameter
                .unwrap_or(defaults.max_impact_parameter),
            dt: physics.dt.unwrap_or(defaults.dt),
            max_steps: physics.max_steps.unwrap_or(defaults.max_steps),
            min_distance: physics.min_distance.unwrap_or(defaults.min_distance),
            escape_distance: physics.escape_distance.unwrap_or(defaults.escape_distance),
        }
    }

    /// Write a commented default configuration file.
    pub fn write_default_file<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Coulomb scattering batch configuration
# All physical quantities are SI; omitted keys fall back to the engine
# defaults (5 MeV alpha particles on a gold nucleus).

[run]
particle_count = 100
seed = 0
output_dir = "scatter_results"

[physics]
z1 = 2                          # projectile atomic number
z2 = 79                         # target atomic number
mass = 6.644e-27                # projectile mass, kg
energy = 8.01088317e-13         # kinetic energy, J (5 MeV)
max_impact_parameter = 3e-14    # m
dt = 1e-22                      # timestep, s
max_steps = 10000
min_distance = 1e-18            # minimum-approach stop, m
escape_distance = 1e-13         # escape stop, m
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_engine_defaults() {
        let config: RunConfig = toml::from_str("").unwrap();
        assert_eq!(config.particle_count(), config::DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.seed(), config::DEFAULT_SEED);
        assert_eq!(config.physical_parameters(), PhysicalParameters::default());
    }

    #[test]
    fn partial_physics_section_keeps_other_defaults() {
        let config: RunConfig = toml::from_str(
            r#"
            [physics]
            z2 = 13
            energy = 1.6e-13
            "#,
        )
        .unwrap();
        let params = config.physical_parameters();
        assert_eq!(params.z2, 13);
        assert_eq!(params.energy, 1.6e-13);
        assert_eq!(params.z1, PhysicalParameters::default().z1);
        assert_eq!(params.dt, PhysicalParameters::default().dt);
    }

    #[test]
    fn run_section_overrides_apply() {
        let config: RunConfig = toml::from_str(
            r#"
            [run]
            particle_count = 7
            seed = 99
            output_dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(config.particle_count(), 7);
        assert_eq!(config.seed(), 99);
        assert_eq!(config.output_dir(), "out");
    }

    #[test]
    fn default_template_parses_back() {
        let config: RunConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let params = config.physical_parameters();
        assert_eq!(params.z1, 2);
        assert_eq!(params.z2, 79);
        assert_eq!(params.max_steps, 10_000);
    }
}
