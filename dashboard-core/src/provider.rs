use crate::model::WeatherRecord;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather observations. The trait is the seam mocked in
/// pipeline tests; production code uses [`openweather::OpenWeatherProvider`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the current observation for a city. Transport errors and
    /// non-success HTTP statuses surface as `Err`; there is no retry.
    async fn fetch_weather(&self, city: &str) -> anyhow::Result<WeatherRecord>;
}
