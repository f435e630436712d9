//! Sensor readings — timestamped samples of the four sensor values.
//!
//! Readings form an unbounded append-only sequence per device: once stored
//! they are never updated or deleted.

use serde::{Deserialize, Serialize};

use crate::error::{SensorHubError, ValidationError};
use crate::time::Timestamp;

/// A stored sensor reading, including the store-assigned row id and the
/// server-assigned insert timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub air_quality: f64,
    pub lpg_level: f64,
    pub recorded_at: Timestamp,
}

/// A reading about to be inserted. The row id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReading {
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub air_quality: f64,
    pub lpg_level: f64,
    pub recorded_at: Timestamp,
}

impl NewReading {
    /// Create a builder for constructing a [`NewReading`].
    #[must_use]
    pub fn builder() -> NewReadingBuilder {
        NewReadingBuilder::default()
    }
}

/// Step-by-step builder for [`NewReading`].
///
/// The four numeric fields have no defaults: a missing value is a
/// validation error, while an explicit zero is accepted.
#[derive(Debug, Default)]
pub struct NewReadingBuilder {
    device_id: Option<String>,
    temperature: Option<f64>,
    humidity: Option<f64>,
    air_quality: Option<f64>,
    lpg_level: Option<f64>,
    recorded_at: Option<Timestamp>,
}

impl NewReadingBuilder {
    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }

    #[must_use]
    pub fn air_quality(mut self, air_quality: f64) -> Self {
        self.air_quality = Some(air_quality);
        self
    }

    #[must_use]
    pub fn lpg_level(mut self, lpg_level: f64) -> Self {
        self.lpg_level = Some(lpg_level);
        self
    }

    /// Override the insert timestamp. Defaults to the current time.
    #[must_use]
    pub fn recorded_at(mut self, recorded_at: Timestamp) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Consume the builder, validate, and return a [`NewReading`].
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when `device_id` is missing
    /// or empty, or when any of the four numeric fields was not provided.
    pub fn build(self) -> Result<NewReading, SensorHubError> {
        let device_id = self.device_id.unwrap_or_default();
        if device_id.is_empty() {
            return Err(ValidationError::MissingDeviceId.into());
        }
        let temperature = self
            .temperature
            .ok_or(ValidationError::MissingField("temperature"))?;
        let humidity = self
            .humidity
            .ok_or(ValidationError::MissingField("humidity"))?;
        let air_quality = self
            .air_quality
            .ok_or(ValidationError::MissingField("air_quality"))?;
        let lpg_level = self
            .lpg_level
            .ok_or(ValidationError::MissingField("lpg_level"))?;

        Ok(NewReading {
            device_id,
            temperature,
            humidity,
            air_quality,
            lpg_level,
            recorded_at: self.recorded_at.unwrap_or_else(crate::time::now),
        })
    }
}
