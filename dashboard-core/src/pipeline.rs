use anyhow::Result;
use log::{error, info};
use std::path::Path;

use crate::archive;
use crate::chart;
use crate::config::Config;
use crate::provider::WeatherProvider;
use crate::storage::{self, ObjectStore};

/// Per-run outcome counts, so callers can report partial failures without
/// scraping log output. Per-city failures never change the exit code.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub archived: usize,
    pub uploaded: usize,
    pub failed_cities: Vec<String>,
}

/// Drive every configured city through fetch -> archive -> render -> upload,
/// strictly in sequence. A failed fetch skips the remaining stages for that
/// city only; archive and upload failures are logged and the run moves on.
/// Chart rendering failures abort the run: a record that parsed carries the
/// three metrics, so a render error is not an expected failure mode.
pub async fn run(
    config: &Config,
    provider: &dyn WeatherProvider,
    store: &dyn ObjectStore,
    chart_dir: &Path,
) -> Result<RunReport> {
    storage::ensure_bucket(store).await;

    let mut report = RunReport::default();

    for city in &config.cities {
        info!("fetching weather for {city}...");

        let mut record = match provider.fetch_weather(city).await {
            Ok(record) => record,
            Err(err) => {
                error!("failed to fetch weather data for {city}: {err:#}");
                report.failed_cities.push(city.clone());
                continue;
            }
        };

        let summary = record.summary();
        info!("temperature: {:.1}°C", summary.temperature_c);
        info!("feels like: {:.1}°C", summary.feels_like_c);
        info!("humidity: {:.0}%", summary.humidity_pct);
        info!("conditions: {}", summary.description);

        let timestamp = archive::timestamp_now();
        match archive::archive(store, &mut record, city, &timestamp).await {
            Ok(key) => {
                info!("weather data for {city} saved as {key}");
                report.archived += 1;
            }
            Err(err) => error!("error saving weather data for {city}: {err:#}"),
        }

        let chart_path = chart::render_to(&record, city, chart_dir)?;
        info!("interactive visualization saved as {}", chart_path.display());

        match chart::upload(store, &chart_path).await {
            Ok(key) => {
                info!("visualization for {city} uploaded as {key}");
                report.uploaded += 1;
            }
            Err(err) => error!("error uploading visualization for {city}: {err:#}"),
        }
    }

    Ok(report)
}
