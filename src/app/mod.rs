// app/mod.rs
// Headless command-line driver: parses args, runs batches, exports results

use std::env;
use std::time::Instant;

use crate::export;
use crate::io::{self, SaveFormat};
use crate::run_config::{RunConfig, DEFAULT_CONFIG_FILE};
use crate::simulation::{BatchResult, BatchRunner};

pub fn run() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => run_batch(&args[2..]),
        "generate" => generate_config(&args[2..]),
        "export" => export_saved(&args[2..]),
        _ => {
            println!("Unknown command: {}", command);
            print_usage();
        }
    }
}

fn print_usage() {
    println!("\nscatter_sim - classical Coulomb scattering batches\n");
    println!("Usage: scatter_sim <command> [options]\n");
    println!("Commands:");
    println!("  run [config.toml]          Run a batch and export the results");
    println!("  generate <config.toml>     Write a default configuration file");
    println!("  export <results> <dir>     Re-export a saved result file as CSV\n");
    println!("Examples:");
    println!("  scatter_sim generate scatter_config.toml");
    println!("  scatter_sim run scatter_config.toml");
    println!("  scatter_sim export scatter_results/batch.json.gz csv_out\n");
}

fn run_batch(args: &[String]) {
    let config = match args.first() {
        Some(path) => match RunConfig::load_from_file(path) {
            Ok(config) => {
                println!("✓ Loaded configuration from {}", path);
                config
            }
            Err(e) => {
                println!("❌ Failed to load {}: {}", path, e);
                return;
            }
        },
        None => match RunConfig::load_default() {
            Ok(config) => {
                println!("✓ Loaded configuration from {}", DEFAULT_CONFIG_FILE);
                config
            }
            Err(_) => {
                println!("⚠️  No {} found, using engine defaults", DEFAULT_CONFIG_FILE);
                RunConfig::default()
            }
        },
    };

    let params = config.physical_parameters();
    let particle_count = config.particle_count();
    let seed = config.seed();

    println!("⚙️  Projectile: Z1={} mass={:e} kg", params.z1, params.mass);
    println!("⚙️  Target: Z2={}", params.z2);
    println!("⚙️  Energy: {:e} J", params.energy);
    println!(
        "⚙️  Sampling: {} particles, b_max={:e} m, seed={}",
        particle_count, params.max_impact_parameter, seed
    );
    println!(
        "⚙️  Integration: dt={:e} s, budget {} steps\n",
        params.dt, params.max_steps
    );

    let start_time = Instant::now();
    let result = BatchRunner::new(params, particle_count, seed).run();
    println!(
        "✓ Batch completed in {:.2}s",
        start_time.elapsed().as_secs_f32()
    );

    print_summary(&result);

    let output_dir = config.output_dir();
    if let Err(e) = export::export_batch(&result, &output_dir) {
        println!("❌ CSV export failed: {}", e);
    }
    let results_path = format!("{}/batch.json.gz", output_dir);
    match io::save_results(&results_path, &result, SaveFormat::Json, true) {
        Ok(()) => println!("✓ Saved batch snapshot to {}", results_path),
        Err(e) => println!("❌ Failed to save snapshot: {}", e),
    }
}

fn print_summary(result: &BatchResult) {
    let stats = &result.statistics;
    println!("\nScattering statistics ({} particles):", stats.particle_count);
    println!(
        "  Mean angle: {:.6} rad ({:.2}°)",
        stats.mean_angle,
        stats.mean_angle.to_degrees()
    );
    println!(
        "  Std dev:    {:.6} rad ({:.2}°)",
        stats.std_dev,
        stats.std_dev.to_degrees()
    );
    println!(
        "  Min/Max:    {:.6} / {:.6} rad",
        stats.min_angle, stats.max_angle
    );
    println!();
}

fn generate_config(args: &[String]) {
    let Some(path) = args.first() else {
        println!("❌ Error: Please specify an output file name");
        println!("Usage: scatter_sim generate <config.toml>");
        return;
    };

    match RunConfig::write_default_file(path) {
        Ok(()) => println!("✓ Wrote default configuration to {}", path),
        Err(e) => println!("❌ Failed to write {}: {}", path, e),
    }
}

fn export_saved(args: &[String]) {
    if args.len() < 2 {
        println!("❌ Error: Please specify a results file and an output directory");
        println!("Usage: scatter_sim export <results> <dir>");
        return;
    }

    let result = match io::load_results(&args[0]) {
        Ok(result) => result,
        Err(e) => {
            println!("❌ Failed to load {}: {}", args[0], e);
            return;
        }
    };

    print_summary(&result);
    if let Err(e) = export::export_batch(&result, &args[1]) {
        println!("❌ CSV export failed: {}", e);
    }
}
