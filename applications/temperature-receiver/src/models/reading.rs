use chrono::{DateTime, Utc};
use serde::Serialize;

/// One stored temperature measurement. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Reading {
    pub id: i64,
    pub temperature: f64,
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/data`.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementsResponse {
    pub status: String,
    pub measurements: Vec<Reading>,
}

impl MeasurementsResponse {
    pub fn success(measurements: Vec<Reading>) -> Self {
        Self {
            status: "success".to_string(),
            measurements,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Everything the HTML dashboard shows.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub readings: Vec<Reading>,
    pub latest: f64,
}

impl Dashboard {
    /// Shown when nothing has been received yet.
    pub const EMPTY_SENTINEL: f64 = 0.0;

    /// `readings` must already be ordered newest first.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let latest = readings
            .first()
            .map(|r| r.temperature)
            .unwrap_or(Self::EMPTY_SENTINEL);
        Self { readings, latest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading(id: i64, temperature: f64) -> Reading {
        Reading {
            id,
            temperature,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, id as u32).unwrap(),
        }
    }

    #[test]
    fn test_dashboard_latest_is_first_reading() {
        let dashboard =
            Dashboard::from_readings(vec![reading(3, 19.8), reading(2, 22.0), reading(1, 21.5)]);
        assert_eq!(dashboard.latest, 19.8);
        assert_eq!(dashboard.readings.len(), 3);
    }

    #[test]
    fn test_dashboard_empty_uses_sentinel() {
        let dashboard = Dashboard::from_readings(Vec::new());
        assert_eq!(dashboard.latest, 0.0);
        assert!(dashboard.readings.is_empty());
    }

    #[test]
    fn test_reading_serializes_wire_fields() {
        let value = serde_json::to_value(reading(7, 21.5)).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["temperature"], 21.5);
        assert_eq!(value["timestamp"], "2025-01-01T12:00:07Z");
    }
}
