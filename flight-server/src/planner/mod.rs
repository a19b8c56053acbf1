//! Journey search.
//!
//! This module implements the core search that answers: "which one- or
//! two-flight journeys connect this origin to this destination on this
//! date?" Candidates are enumerated from the full flight-event set and
//! validated against the journey constraints.

mod generate;
mod record;
mod search;

pub use generate::generate_journeys;
pub use record::{FlightRecord, JourneyRecord};
pub use search::{FlightEventsProvider, JourneySearch, SearchError};
