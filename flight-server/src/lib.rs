//! Flight journey search server.
//!
//! A web service that answers: "which one- or two-flight journeys connect
//! this origin to this destination on this date?" Flight data comes from
//! an external flight-events API; journeys are validated for chronological
//! consistency, connection gaps, and total duration.

pub mod domain;
pub mod planner;
pub mod provider;
pub mod web;
