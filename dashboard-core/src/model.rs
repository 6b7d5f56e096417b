use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A payload that does not look like an OpenWeather observation.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("malformed weather payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The metric fields consumed downstream (console summary and chart).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub description: String,
}

// Deserialize views over the upstream schema; only the consumed fields.
#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwBody {
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

/// One weather observation for a single city.
///
/// Keeps the raw upstream JSON object so the archived body is exactly what
/// the API returned (unknown fields included), alongside a typed summary of
/// the fields this system consumes.
#[derive(Debug, Clone)]
pub struct WeatherRecord {
    raw: Map<String, Value>,
    summary: WeatherSummary,
}

impl WeatherRecord {
    /// Validate and wrap an API response body.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }

        // Deserialize the typed view by reference; the payload itself is
        // kept as-is for archiving.
        let body = OwBody::deserialize(&value)?;

        let Value::Object(raw) = value else {
            return Err(RecordError::NotAnObject);
        };

        let description = body
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(Self {
            raw,
            summary: WeatherSummary {
                temperature_c: body.main.temp,
                feels_like_c: body.main.feels_like,
                humidity_pct: body.main.humidity,
                description,
            },
        })
    }

    pub fn summary(&self) -> &WeatherSummary {
        &self.summary
    }

    /// Add the archive timestamp to the raw payload. All original keys are
    /// preserved; a second stamp replaces the first.
    pub fn stamp(&mut self, timestamp: &str) {
        self.raw
            .insert("timestamp".to_string(), Value::String(timestamp.to_string()));
    }

    /// Serialize the (possibly stamped) payload for storage.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.raw)
    }
}
