//! Web layer for the flight journey search service.
//!
//! Provides the HTTP endpoint for searching journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
