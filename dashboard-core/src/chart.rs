use anyhow::{Context, Result, anyhow};
use plotly::color::NamedColor;
use plotly::common::{Marker, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::WeatherRecord;
use crate::storage::ObjectStore;

/// Prefix under which rendered charts live. Chart keys carry no timestamp,
/// so a later run for the same city overwrites the previous chart.
pub const VISUALIZATION_PREFIX: &str = "visualizations";

const LABELS: [&str; 3] = ["Temperature (°C)", "Feels Like (°C)", "Humidity (%)"];

/// The data of a rendered chart: one bar per metric, y axis from zero to the
/// largest value plus ten.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub values: [f64; 3],
    pub y_max: f64,
}

pub fn chart_spec(record: &WeatherRecord) -> ChartSpec {
    let summary = record.summary();
    let values = [
        summary.temperature_c,
        summary.feels_like_c,
        summary.humidity_pct,
    ];
    let y_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 10.0;

    ChartSpec { values, y_max }
}

pub fn chart_file_name(city: &str) -> String {
    format!("{city}_weather_chart.html")
}

fn build_plot(spec: &ChartSpec, city: &str) -> Plot {
    let bar = Bar::new(LABELS.to_vec(), spec.values.to_vec()).marker(Marker::new().color_array(
        vec![NamedColor::Blue, NamedColor::Green, NamedColor::Orange],
    ));

    let layout = Layout::new()
        .title(Title::with_text(format!("Weather Data for {city}")))
        .x_axis(Axis::new().title(Title::with_text("Metrics")))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Values"))
                .range(vec![0.0, spec.y_max]),
        );

    let mut plot = Plot::new();
    plot.add_trace(bar);
    plot.set_layout(layout);
    plot
}

/// Render the interactive chart for one city into `dir` and return the file
/// path. I/O errors propagate; a record that made it through the fetch is
/// guaranteed to carry the three metrics.
pub fn render_to(record: &WeatherRecord, city: &str, dir: &Path) -> Result<PathBuf> {
    let spec = chart_spec(record);
    let plot = build_plot(&spec, city);

    let path = dir.join(chart_file_name(city));
    fs::write(&path, plot.to_html())
        .with_context(|| format!("Failed to write chart file: {}", path.display()))?;

    Ok(path)
}

/// Read a rendered chart back from disk and write it to the bucket under
/// `visualizations/{file_name}`. Returns the object key on success.
pub async fn upload(store: &dyn ObjectStore, file_path: &Path) -> Result<String> {
    let file_name = file_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Chart path has no file name: {}", file_path.display()))?;

    let body = fs::read(file_path)
        .with_context(|| format!("Failed to read chart file: {}", file_path.display()))?;

    let key = format!("{VISUALIZATION_PREFIX}/{file_name}");
    store.put_object(&key, body, "text/html").await?;

    Ok(key)
}
