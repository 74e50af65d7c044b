//! Command-line interface for solarscan
//!
//! Reads a rooftop image, runs the assessment pipeline, and prints the
//! report as JSON.

use solarscan::{assess_rooftop, PipelineConfig};
use std::{env, path::PathBuf, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut image_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a path");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path.is_none() {
                    image_path = Some(PathBuf::from(arg));
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path) = image_path else {
        print_help(&args[0]);
        process::exit(1);
    };

    let config = match config_path {
        Some(path) => match PipelineConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: failed to load config {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => PipelineConfig::default_residential(),
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let bytes = match std::fs::read(&image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", image_path.display(), e);
            process::exit(1);
        }
    };

    match assess_rooftop(&bytes, &config) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [--config CONFIG.json] IMAGE", program);
    println!();
    println!("Assess a rooftop image (JPEG or PNG) for solar suitability");
    println!("and print the assessment report as JSON.");
    println!();
    println!("Options:");
    println!("  --config PATH   Load pipeline configuration from a JSON file");
    println!("  -h, --help      Show this help");
}
