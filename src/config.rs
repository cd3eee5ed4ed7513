/// Service configuration loader - parses riskmon.toml
///
/// Keeps deployment details (reference data paths, endpoint port) out of
/// code. Unlike the reference data itself, the config file is optional: a
/// missing riskmon.toml means defaults, so a bare checkout runs with the
/// shipped data files. The `CITY_DATA_PATH` / `STATION_DATA_PATH`
/// environment variables override whatever the file says, which is how
/// containerized deployments remap the data volume.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::logging::{self, Component};

/// Default config file location, relative to the working directory.
pub const CONFIG_PATH: &str = "riskmon.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Path to the city directory JSON file.
    #[serde(default = "default_city_data_path")]
    pub city_data_path: String,

    /// Path to the station directory JSON file.
    #[serde(default = "default_station_data_path")]
    pub station_data_path: String,

    /// Port for the HTTP endpoint when started with --endpoint.
    #[serde(default = "default_endpoint_port")]
    pub endpoint_port: u16,
}

fn default_city_data_path() -> String {
    "city_data.json".to_string()
}

fn default_station_data_path() -> String {
    "station_data.json".to_string()
}

fn default_endpoint_port() -> u16 {
    8080
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            city_data_path: default_city_data_path(),
            station_data_path: default_station_data_path(),
            endpoint_port: default_endpoint_port(),
        }
    }
}

/// Loads configuration from `riskmon.toml`, falling back to defaults when
/// the file is absent, then applies environment overrides.
pub fn load_config() -> ServiceConfig {
    load_config_from(CONFIG_PATH)
}

/// Loads configuration from an explicit path. A present-but-malformed file
/// is an error worth hearing about, but still falls back to defaults — the
/// service stays up on the shipped data.
pub fn load_config_from<P: AsRef<Path>>(path: P) -> ServiceConfig {
    let path = path.as_ref();

    let mut config = match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ServiceConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                logging::error(
                    Component::System,
                    &format!("{} is malformed ({}); using defaults", path.display(), e),
                );
                ServiceConfig::default()
            }
        },
        Err(_) => {
            logging::info(
                Component::System,
                &format!("no {} found; using defaults", path.display()),
            );
            ServiceConfig::default()
        }
    };

    if let Ok(city_path) = env::var("CITY_DATA_PATH") {
        config.city_data_path = city_path;
    }
    if let Ok(station_path) = env::var("STATION_DATA_PATH") {
        config.station_data_path = station_path;
    }

    config
}
