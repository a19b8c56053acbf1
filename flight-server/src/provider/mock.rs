//! Mock flight-events provider for development without API access.
//!
//! Loads a JSON fixture of wire records and serves it for every query,
//! as if it were a live API response.

use std::path::Path;

use crate::domain::FlightEvent;
use crate::planner::FlightEventsProvider;

use super::convert::convert_events;
use super::error::ProviderError;
use super::types::FlightEventRecord;

/// Mock provider that serves flight events from a JSON fixture file.
///
/// The fixture is an array of wire records, the same shape the live API
/// returns. It is served as-is for every query; date and route filtering
/// is the live API's job, not the fixture's.
#[derive(Debug, Clone)]
pub struct MockFlightEventsProvider {
    events: Vec<FlightEvent>,
}

impl MockFlightEventsProvider {
    /// Create a mock provider by loading a JSON fixture file.
    ///
    /// The records are validated into domain types up front, so a broken
    /// fixture fails at startup rather than mid-request.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| ProviderError::Api {
            status: 0,
            message: format!("Failed to read mock data file {:?}: {}", path, e),
        })?;

        let records: Vec<FlightEventRecord> =
            serde_json::from_str(&json).map_err(|e| ProviderError::Json {
                message: e.to_string(),
                body: Some(json.chars().take(500).collect()),
            })?;

        Ok(Self {
            events: convert_events(&records)?,
        })
    }

    /// Create a mock provider from already-validated events.
    pub fn from_events(events: Vec<FlightEvent>) -> Self {
        Self { events }
    }

    /// Number of events in the fixture.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the fixture is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FlightEventsProvider for MockFlightEventsProvider {
    async fn flight_events(
        &self,
        _date: &str,
        _origin: &str,
        _destination: &str,
    ) -> Result<Vec<FlightEvent>, ProviderError> {
        Ok(self.events.clone())
    }
}
