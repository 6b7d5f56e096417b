//! Shared fixtures for unit tests: a canned OpenWeather payload and an
//! in-memory [`ObjectStore`] that records every put.

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

use crate::storage::ObjectStore;

/// A trimmed-down OpenWeather current-weather body: temp 10, feels-like 8,
/// humidity 60.
pub(crate) fn sample_payload() -> Value {
    json!({
        "name": "Berlin",
        "main": { "temp": 10.0, "feels_like": 8.0, "humidity": 60 },
        "weather": [ { "description": "light rain", "icon": "10d" } ],
        "wind": { "speed": 3.2 }
    })
}

#[derive(Debug, Clone)]
pub(crate) struct PutCall {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingStore {
    pub puts: Mutex<Vec<PutCall>>,
    fail_puts: bool,
}

impl RecordingStore {
    /// A store whose puts all fail, for degraded-path tests.
    pub(crate) fn failing() -> Self {
        Self {
            puts: Mutex::new(Vec::new()),
            fail_puts: true,
        }
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    fn bucket_name(&self) -> &str {
        "test-bucket"
    }

    async fn head_bucket(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn create_bucket(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<()> {
        if self.fail_puts {
            return Err(anyhow!("injected storage failure"));
        }

        self.puts.lock().unwrap().push(PutCall {
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });

        Ok(())
    }
}
