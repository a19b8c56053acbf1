//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query parameters for a journey search.
#[derive(Debug, Deserialize)]
pub struct SearchJourneysRequest {
    /// Travel date, e.g. "2024-09-12"
    pub date: String,

    /// Origin city code
    #[serde(rename = "departureCity")]
    pub departure_city: String,

    /// Destination city code
    #[serde(rename = "arrivalCity")]
    pub arrival_city: String,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
