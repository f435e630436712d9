//! Reading service — use-cases for ingesting and querying sensor data.

use chrono::NaiveDate;

use sensorhub_domain::error::{NotFoundError, SensorHubError};
use sensorhub_domain::reading::{NewReading, SensorReading};
use sensorhub_domain::time::day_bounds;

use crate::ports::ReadingRepository;

/// Application service for the append-only reading stream.
pub struct ReadingService<R> {
    repo: R,
}

impl<R: ReadingRepository> ReadingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Append one reading with a server-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::Validation`] when `device_id` is empty,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn ingest(
        &self,
        device_id: &str,
        temperature: f64,
        humidity: f64,
        air_quality: f64,
        lpg_level: f64,
    ) -> Result<SensorReading, SensorHubError> {
        let reading = NewReading::builder()
            .device_id(device_id)
            .temperature(temperature)
            .humidity(humidity)
            .air_quality(air_quality)
            .lpg_level(lpg_level)
            .build()?;
        self.repo.insert(reading).await
    }

    /// All readings for a device, most recent first. An empty result is
    /// success, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self, device_id: &str) -> Result<Vec<SensorReading>, SensorHubError> {
        self.repo.find_by_device(device_id).await
    }

    /// The most recent reading for a device.
    ///
    /// # Errors
    ///
    /// Returns [`SensorHubError::NotFound`] when the device has no
    /// readings at all, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn latest(&self, device_id: &str) -> Result<SensorReading, SensorHubError> {
        self.repo.find_latest(device_id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "SensorReading",
                id: device_id.to_string(),
            }
            .into()
        })
    }

    /// Readings for a device within the inclusive UTC day window of
    /// `date`, oldest first — chronological playback order, deliberately
    /// the opposite of [`Self::list`].
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn history(
        &self,
        device_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<SensorReading>, SensorHubError> {
        let (from, to) = day_bounds(date);
        self.repo.find_in_range(device_id, from, to).await
    }
}
