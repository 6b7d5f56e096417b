use clap::Parser;
use dashboard_core::{Config, OpenWeatherProvider, S3Store, pipeline};
use log::info;
use std::path::Path;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    version,
    about = "Fetch city weather, archive it to S3 and upload an interactive chart"
)]
pub struct Cli {
    /// City to process; repeat to override the configured list.
    #[arg(long = "city")]
    pub cities: Vec<String>,

    /// Destination bucket, overriding AWS_BUCKET_NAME.
    #[arg(long)]
    pub bucket: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        if !self.cities.is_empty() {
            config.cities = self.cities;
        }
        if let Some(bucket) = self.bucket {
            config.bucket_name = bucket;
        }

        let provider = OpenWeatherProvider::new(config.api_key.clone());
        let store = S3Store::connect(&config).await;

        // Charts land in the working directory; they are scratch files and
        // are not cleaned up after upload.
        let report = pipeline::run(&config, &provider, &store, Path::new(".")).await?;

        info!(
            "run complete: {} archived, {} uploaded, {} failed",
            report.archived,
            report.uploaded,
            report.failed_cities.len()
        );

        Ok(())
    }
}
