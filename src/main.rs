//! Flood/Drought Risk Assessment Service - Main Entry
//!
//! Loads the city and station reference directories once at startup into an
//! immutable snapshot, then either:
//! 1. Serves the HTTP JSON API (--endpoint), or
//! 2. Runs a single assessment and prints the result (--city)
//!
//! Reference data problems never abort startup: a missing or malformed file
//! loads as an empty directory (logged) and the affected endpoint reports a
//! server-side error per request, so the health check stays reachable.
//!
//! Usage:
//!   cargo run --release -- --endpoint 8080   # Serve the HTTP API
//!   cargo run --release -- --city "Delhi"    # One-shot assessment
//!
//! Environment:
//!   CITY_DATA_PATH / STATION_DATA_PATH - override configured data paths

use std::env;
use std::sync::Arc;

use riskmon_service::config;
use riskmon_service::directory::ReferenceSnapshot;
use riskmon_service::endpoint;
use riskmon_service::logging::{self, Component, LogLevel};
use riskmon_service::simulate::RandomLevels;
use riskmon_service::{assess, model::RiskError};

fn main() {
    println!("🌊 Flood/Drought Risk Assessment Service");
    println!("=========================================\n");

    dotenv::dotenv().ok();
    logging::init_logger(LogLevel::Info, None);

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut endpoint_port: Option<u16> = None;
    let mut one_shot_city: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --endpoint requires a port number");
                    std::process::exit(1);
                }
            }
            "--city" => {
                if i + 1 < args.len() {
                    one_shot_city = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --city requires a city name");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--endpoint PORT] [--city NAME]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load configuration and the reference snapshot
    println!("📊 Loading reference data...");
    let config = config::load_config();
    let snapshot = ReferenceSnapshot::load(&config.city_data_path, &config.station_data_path);
    println!(
        "   {} cities, {} stations loaded\n",
        snapshot.cities.len(),
        snapshot.stations.len()
    );

    if snapshot.cities.is_empty() {
        logging::warn(
            Component::System,
            "city directory is empty; assessments will fail until data is provided",
        );
    }
    if snapshot.stations.is_empty() {
        logging::warn(
            Component::System,
            "station directory is empty; assessments will fail until data is provided",
        );
    }

    // One-shot mode: assess and print
    if let Some(city) = one_shot_city {
        let mut levels = RandomLevels::new();
        match assess::assess_city(&snapshot, &city, &mut levels) {
            Ok(assessment) => {
                println!("{}", serde_json::to_string_pretty(&assessment).unwrap());
            }
            Err(e @ RiskError::CityNotFound(_)) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("❌ Reference data problem: {}", e);
                std::process::exit(2);
            }
        }
        return;
    }

    // Serving mode
    let port = endpoint_port.unwrap_or(config.endpoint_port);
    println!("🚀 Starting HTTP endpoint on port {}...", port);
    if let Err(e) = endpoint::start_endpoint_server(port, Arc::new(snapshot)) {
        eprintln!("\n❌ Endpoint server error: {}\n", e);
        std::process::exit(1);
    }
}
