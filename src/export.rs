/// Export batch results to CSV format for external analysis
use std::fs::File;
use std::io::Write;

use crate::simulation::BatchResult;

/// Write one row per particle: id, impact parameter, angle (radians plus a
/// degree column for spreadsheet use), final position, trajectory length.
pub fn export_particles_to_csv(
    result: &BatchResult,
    output_dir: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!("{}/particles.csv", output_dir);
    let mut file = File::create(&filename)?;

    writeln!(
        file,
        "Particle_ID,Impact_Parameter_m,Scattering_Angle_rad,Scattering_Angle_deg,Final_X_m,Final_Y_m,Trajectory_Points"
    )?;

    for record in &result.particles {
        let (final_x, final_y) = match record.final_position {
            Some(pos) => (format!("{:e}", pos.x), format!("{:e}", pos.y)),
            None => (String::new(), String::new()),
        };
        writeln!(
            file,
            "{},{:e},{},{},{},{},{}",
            record.id,
            record.initial.impact_parameter,
            record.scattering_angle,
            record.scattering_angle.to_degrees(),
            final_x,
            final_y,
            record.trajectory.len()
        )?;
    }

    Ok(filename)
}

/// Write the aggregate statistics plus the generating parameters as a
/// single-row CSV.
pub fn export_summary_to_csv(
    result: &BatchResult,
    output_dir: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let filename = format!("{}/summary.csv", output_dir);
    let mut file = File::create(&filename)?;

    writeln!(
        file,
        "Particle_Count,Mean_Angle_rad,Std_Dev_rad,Min_Angle_rad,Max_Angle_rad,Z1,Z2,Energy_J,Mass_kg,Max_Impact_Parameter_m,Dt_s,Max_Steps,Seed"
    )?;

    let stats = &result.statistics;
    let params = &result.params;
    writeln!(
        file,
        "{},{},{},{},{},{},{},{:e},{:e},{:e},{:e},{},{}",
        stats.particle_count,
        stats.mean_angle,
        stats.std_dev,
        stats.min_angle,
        stats.max_angle,
        params.z1,
        params.z2,
        params.energy,
        params.mass,
        params.max_impact_parameter,
        params.dt,
        params.max_steps,
        result.seed
    )?;

    Ok(filename)
}

/// Convenience wrapper writing both CSV files into `output_dir`.
pub fn export_batch(result: &BatchResult, output_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let particles = export_particles_to_csv(result, output_dir)?;
    let summary = export_summary_to_csv(result, output_dir)?;
    println!("✓ Exported {} particle records to {}", result.particles.len(), particles);
    println!("✓ Exported summary to {}", summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicalParameters;
    use crate::simulation::BatchRunner;

    #[test]
    fn csv_files_have_header_and_rows() {
        let result = BatchRunner::new(PhysicalParameters::default(), 4, 21).run();
        let dir = std::env::temp_dir().join("scatter_sim_export");
        let dir = dir.to_str().unwrap();

        let particles = export_particles_to_csv(&result, dir).unwrap();
        let contents = std::fs::read_to_string(&particles).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 5, "header plus one row per particle");
        assert!(lines[0].starts_with("Particle_ID,"));

        let summary = export_summary_to_csv(&result, dir).unwrap();
        let contents = std::fs::read_to_string(&summary).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with('4'), "summary row must lead with the particle count");
    }
}
