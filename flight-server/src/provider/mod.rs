//! Flight-events API client.
//!
//! This module talks to the external flight-events service that supplies
//! the raw segment data for a date and route. Responses are deserialized
//! into wire DTOs and validated into domain types immediately at this
//! boundary, so malformed upstream data fails fast instead of propagating.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{FlightsApiClient, FlightsApiConfig};
pub use convert::{ConversionError, convert_event, convert_events};
pub use error::ProviderError;
pub use mock::MockFlightEventsProvider;
pub use types::FlightEventRecord;
