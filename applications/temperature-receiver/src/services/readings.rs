use chrono::{SubsecRound, Utc};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Dashboard, Reading};
use crate::storage::SharedStore;

pub const NO_PAYLOAD: &str = "No JSON received";
pub const NO_TEMPERATURE: &str = "No 'temperature' field found";
pub const NOT_NUMERIC: &str = "'temperature' must be a number";

#[derive(Clone)]
pub struct ReadingService {
    store: SharedStore,
}

impl ReadingService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Validate an incoming payload and store it with the server's clock.
    pub async fn ingest(&self, payload: &Value) -> Result<Reading> {
        let temperature = parse_temperature(payload)?;
        // Postgres keeps microseconds; truncate so every backend returns
        // exactly what was stored.
        let timestamp = Utc::now().trunc_subsecs(6);

        let id = self.store.append(temperature, timestamp).await?;
        tracing::info!(id, temperature, %timestamp, "Reading received");

        Ok(Reading {
            id,
            temperature,
            timestamp,
        })
    }

    /// All readings, newest first.
    pub async fn history(&self) -> Result<Vec<Reading>> {
        self.store.list_all().await
    }

    pub async fn dashboard(&self) -> Result<Dashboard> {
        let readings = self.store.list_all().await?;
        Ok(Dashboard::from_readings(readings))
    }
}

/// Pull a finite temperature out of a JSON payload.
///
/// Numbers are taken as-is; strings are accepted when they parse as a
/// number. Anything else is rejected.
pub fn parse_temperature(payload: &Value) -> Result<f64> {
    let object = payload
        .as_object()
        .ok_or_else(|| AppError::Validation(NO_PAYLOAD.to_string()))?;

    let value = match object.get("temperature") {
        None | Some(Value::Null) => {
            return Err(AppError::Validation(NO_TEMPERATURE.to_string()));
        }
        Some(value) => value,
    };

    let temperature = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match temperature {
        Some(t) if t.is_finite() => Ok(t),
        _ => Err(AppError::Validation(NOT_NUMERIC.to_string())),
    }
}
