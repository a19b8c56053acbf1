//! Domain types for the flight journey search engine.
//!
//! This module contains the core domain model: validated flight data and
//! the journey entity built from it. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod city;
mod constraints;
mod flight;
mod flight_number;
mod journey;
mod time;

pub use city::{CityCode, InvalidCityCode};
pub use constraints::{InvalidConstraints, JourneyConstraints};
pub use flight::{FlightEvent, InvalidFlight};
pub use flight_number::{FlightNumber, InvalidFlightNumber};
pub use journey::{InvalidJourney, Journey};
pub use time::{InvalidTimestamp, UtcInstant};
