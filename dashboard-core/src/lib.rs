//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration handling (environment variables + optional settings file)
//! - The weather provider abstraction and its OpenWeather implementation
//! - Object storage (S3) with one-shot bucket provisioning
//! - The archiver, chart renderer/uploader and the per-run pipeline
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod archive;
pub mod chart;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod storage;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::Config;
pub use model::{WeatherRecord, WeatherSummary};
pub use pipeline::{RunReport, run};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use storage::{ObjectStore, ensure_bucket, s3::S3Store};
