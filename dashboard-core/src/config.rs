use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Region the bucket is created in when it does not exist yet.
pub const DEFAULT_REGION: &str = "eu-central-1";

const DEFAULT_CITIES: &[&str] = &["Berlin", "Munich", "Paderborn"];

const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
const BUCKET_VAR: &str = "AWS_BUCKET_NAME";
const REGION_VAR: &str = "AWS_REGION";
const CITIES_VAR: &str = "WEATHER_CITIES";

/// Runtime configuration, constructed once at startup and passed to each
/// component. AWS credentials themselves are never read here; the storage
/// client resolves them through its default credential chain.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bucket_name: String,
    pub region: String,
    pub cities: Vec<String>,
}

/// Optional on-disk settings for values that are not credentials.
///
/// Example TOML:
/// region = "eu-central-1"
/// cities = ["Berlin", "Munich"]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub region: Option<String>,
    pub cities: Option<Vec<String>>,
}

impl FileConfig {
    /// Load the settings file, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: FileConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the settings file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "dashboard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

impl Config {
    /// Build the runtime configuration from the environment and the optional
    /// settings file. Environment variables win over the file; the file wins
    /// over built-in defaults. The API key and bucket name have no default.
    pub fn load() -> Result<Self> {
        let file = FileConfig::load()?;
        Self::resolve(
            env::var(API_KEY_VAR).ok(),
            env::var(BUCKET_VAR).ok(),
            env::var(REGION_VAR).ok(),
            env::var(CITIES_VAR).ok(),
            file,
        )
    }

    fn resolve(
        api_key: Option<String>,
        bucket_name: Option<String>,
        region: Option<String>,
        cities: Option<String>,
        file: FileConfig,
    ) -> Result<Self> {
        let api_key = api_key.ok_or_else(|| {
            anyhow!("{API_KEY_VAR} is not set. Get a key at openweathermap.org and export it.")
        })?;

        let bucket_name = bucket_name.ok_or_else(|| {
            anyhow!("{BUCKET_VAR} is not set. Export the destination bucket name.")
        })?;

        let region = region
            .or(file.region)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let cities = cities
            .map(|list| parse_city_list(&list))
            .or(file.cities)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CITIES.iter().map(|c| (*c).to_string()).collect());

        Ok(Self {
            api_key,
            bucket_name,
            region,
            cities,
        })
    }
}

/// Split a comma-separated city list, trimming whitespace and dropping
/// empty entries.
fn parse_city_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
