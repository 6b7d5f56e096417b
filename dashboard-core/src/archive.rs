use anyhow::{Context, Result};
use chrono::Local;

use crate::model::WeatherRecord;
use crate::storage::ObjectStore;

/// Prefix under which raw weather observations accumulate.
pub const DATA_PREFIX: &str = "weather-data";

/// Current local time in the `YYYYMMDD-HHMMSS` form used in object keys and
/// in the stamped `timestamp` field.
pub fn timestamp_now() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Key for one archived observation. Unique per write thanks to the
/// timestamp component.
pub fn object_key(city: &str, timestamp: &str) -> String {
    format!("{DATA_PREFIX}/{city}-{timestamp}.json")
}

/// Stamp a fetched record and write it to the bucket. Returns the object key
/// on success; storage errors surface as `Err` for the orchestrator to log.
pub async fn archive(
    store: &dyn ObjectStore,
    record: &mut WeatherRecord,
    city: &str,
    timestamp: &str,
) -> Result<String> {
    record.stamp(timestamp);

    let body = record
        .to_json_bytes()
        .context("Failed to serialize weather record")?;

    let key = object_key(city, timestamp);
    store.put_object(&key, body, "application/json").await?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{RecordingStore, sample_payload};
    use serde_json::{Value, json};

    #[test]
    fn timestamp_is_fourteen_digits_with_separator() {
        let ts = timestamp_now();

        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'-');
        assert_eq!(ts.chars().filter(char::is_ascii_digit).count(), 14);
    }

    #[test]
    fn object_key_matches_expected_pattern() {
        assert_eq!(
            object_key("Berlin", "20250101-120000"),
            "weather-data/Berlin-20250101-120000.json"
        );
    }

    #[tokio::test]
    async fn archive_writes_stamped_record_under_timestamped_key() {
        let store = RecordingStore::default();
        let mut record = WeatherRecord::from_value(sample_payload()).unwrap();

        let key = archive(&store, &mut record, "Berlin", "20250101-120000")
            .await
            .expect("put succeeds");

        assert_eq!(key, "weather-data/Berlin-20250101-120000.json");

        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].key, key);
        assert_eq!(puts[0].content_type, "application/json");

        // Round-trip: stored body is the original record plus `timestamp`.
        let stored: Value = serde_json::from_slice(&puts[0].body).unwrap();
        let original = sample_payload();
        for key in original.as_object().unwrap().keys() {
            assert_eq!(stored[key], original[key]);
        }
        assert_eq!(stored["timestamp"], json!("20250101-120000"));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_error() {
        let store = RecordingStore::failing();
        let mut record = WeatherRecord::from_value(sample_payload()).unwrap();

        let err = archive(&store, &mut record, "Berlin", "20250101-120000")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("injected storage failure"));
        assert!(store.puts.lock().unwrap().is_empty());
    }
}
