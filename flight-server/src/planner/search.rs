//! Journey search use case.
//!
//! Wires the flight-events provider to candidate generation: fetch the
//! day's events, enumerate journeys, project them into result records.

use std::future::Future;

use tracing::debug;

use crate::domain::{FlightEvent, InvalidCityCode, JourneyConstraints};
use crate::provider::ProviderError;

use super::generate::generate_journeys;
use super::record::JourneyRecord;

/// Error from a journey search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query's origin or destination is not a valid city code
    #[error(transparent)]
    InvalidCity(#[from] InvalidCityCode),

    /// The flight-events provider failed; passed through unchanged
    #[error("flight events provider failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Trait for supplying flight events for a date and route.
///
/// This abstraction allows the search to be tested with mock data. The
/// provider owns fetch mechanics entirely; the search never retries,
/// paginates, or caches its result.
pub trait FlightEventsProvider {
    /// Get the flight events for a date and route.
    ///
    /// May return an empty set; that is a valid answer, not an error.
    fn flight_events(
        &self,
        date: &str,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<Vec<FlightEvent>, ProviderError>> + Send;
}

/// Journey search over a flight-events provider.
///
/// Holds no per-query state: every `execute` call is independent and
/// idempotent for identical inputs.
pub struct JourneySearch<P> {
    provider: P,
    constraints: JourneyConstraints,
}

impl<P: FlightEventsProvider> JourneySearch<P> {
    /// Create a search with the default constraints (24h total, 2
    /// connections, 4h connection gap).
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            constraints: JourneyConstraints::default(),
        }
    }

    /// Create a search with custom constraints.
    pub fn with_constraints(provider: P, constraints: JourneyConstraints) -> Self {
        Self {
            provider,
            constraints,
        }
    }

    /// Search journeys from `from` to `to` on `date`.
    ///
    /// Returns the accepted journeys in discovery order, or an empty list
    /// when no candidate survives validation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `from`/`to` are malformed city codes, or if the
    /// provider fails. Candidate-level validation failures are internal
    /// and never surface here.
    pub async fn execute(
        &self,
        date: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<JourneyRecord>, SearchError> {
        let events = self.provider.flight_events(date, from, to).await?;
        debug!(events = events.len(), date, from, to, "fetched flight events");

        let journeys = generate_journeys(&events, from, to, &self.constraints)?;

        Ok(journeys.iter().map(JourneyRecord::from_journey).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityCode, FlightNumber, UtcInstant};

    fn flight(number: &str, from: &str, to: &str, dep: &str, arr: &str) -> FlightEvent {
        FlightEvent::new(
            FlightNumber::parse(number).unwrap(),
            UtcInstant::parse(dep).unwrap(),
            UtcInstant::parse(arr).unwrap(),
            CityCode::parse(from).unwrap(),
            CityCode::parse(to).unwrap(),
        )
        .unwrap()
    }

    /// Mock provider serving a fixed event set.
    struct MockProvider {
        events: Vec<FlightEvent>,
    }

    impl FlightEventsProvider for MockProvider {
        async fn flight_events(
            &self,
            _date: &str,
            _origin: &str,
            _destination: &str,
        ) -> Result<Vec<FlightEvent>, ProviderError> {
            Ok(self.events.clone())
        }
    }

    /// Mock provider that always fails.
    struct FailingProvider;

    impl FlightEventsProvider for FailingProvider {
        async fn flight_events(
            &self,
            _date: &str,
            _origin: &str,
            _destination: &str,
        ) -> Result<Vec<FlightEvent>, ProviderError> {
            Err(ProviderError::Api {
                status: 503,
                message: "upstream unavailable".into(),
            })
        }
    }

    #[tokio::test]
    async fn direct_flight_yields_one_journey() {
        let search = JourneySearch::new(MockProvider {
            events: vec![flight(
                "IB1234",
                "BUE",
                "BCN",
                "2024-09-12T10:00:00Z",
                "2024-09-12T22:00:00Z",
            )],
        });

        let journeys = search.execute("2024-09-12", "BUE", "BCN").await.unwrap();

        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].connections, 1);
        assert_eq!(journeys[0].path[0].flight_number, "IB1234");
    }

    #[tokio::test]
    async fn connection_within_gap_limit_is_found() {
        let search = JourneySearch::new(MockProvider {
            events: vec![
                flight(
                    "IB1234",
                    "BUE",
                    "MAD",
                    "2024-09-12T12:00:00Z",
                    "2024-09-12T18:00:00Z",
                ),
                flight(
                    "IB5678",
                    "MAD",
                    "BCN",
                    "2024-09-12T20:00:00Z",
                    "2024-09-12T23:00:00Z",
                ),
            ],
        });

        let journeys = search.execute("2024-09-12", "BUE", "BCN").await.unwrap();

        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].connections, 2);
        assert_eq!(journeys[0].path[0].departure_city, "BUE");
        assert_eq!(journeys[0].path[1].arrival_city, "BCN");
    }

    #[tokio::test]
    async fn unreachable_connection_yields_empty_result() {
        // The only onward flight departs 16 hours after arrival
        let search = JourneySearch::new(MockProvider {
            events: vec![
                flight(
                    "IB1234",
                    "BUE",
                    "MAD",
                    "2024-09-12T12:00:00Z",
                    "2024-09-12T18:00:00Z",
                ),
                flight(
                    "IB5678",
                    "MAD",
                    "BCN",
                    "2024-09-13T10:00:00Z",
                    "2024-09-13T12:00:00Z",
                ),
            ],
        });

        let journeys = search.execute("2024-09-12", "BUE", "BCN").await.unwrap();
        assert!(journeys.is_empty());
    }

    #[tokio::test]
    async fn no_events_yields_empty_result() {
        let search = JourneySearch::new(MockProvider { events: vec![] });

        let journeys = search.execute("2024-09-12", "BUE", "BCN").await.unwrap();
        assert!(journeys.is_empty());
    }

    #[tokio::test]
    async fn invalid_city_code_propagates() {
        let search = JourneySearch::new(MockProvider { events: vec![] });

        let result = search.execute("2024-09-12", "buenos aires", "BCN").await;
        assert!(matches!(result, Err(SearchError::InvalidCity(_))));
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let search = JourneySearch::new(FailingProvider);

        let result = search.execute("2024-09-12", "BUE", "BCN").await;
        assert!(matches!(result, Err(SearchError::Provider(_))));
    }

    #[tokio::test]
    async fn repeated_searches_are_order_stable() {
        let search = JourneySearch::new(MockProvider {
            events: vec![
                flight(
                    "IB1234",
                    "BUE",
                    "MAD",
                    "2024-09-12T12:00:00Z",
                    "2024-09-12T18:00:00Z",
                ),
                flight(
                    "IB5678",
                    "MAD",
                    "BCN",
                    "2024-09-12T20:00:00Z",
                    "2024-09-12T23:00:00Z",
                ),
                flight(
                    "IB9012",
                    "BUE",
                    "BCN",
                    "2024-09-12T10:00:00Z",
                    "2024-09-12T22:00:00Z",
                ),
            ],
        });

        let first = search.execute("2024-09-12", "BUE", "BCN").await.unwrap();
        let second = search.execute("2024-09-12", "BUE", "BCN").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn custom_constraints_change_acceptance() {
        // A 30-hour direct flight passes only with a raised duration limit
        let events = vec![flight(
            "IB1234",
            "BUE",
            "SYD",
            "2024-09-12T00:00:00Z",
            "2024-09-13T06:00:00Z",
        )];

        let default_search = JourneySearch::new(MockProvider {
            events: events.clone(),
        });
        assert!(
            default_search
                .execute("2024-09-12", "BUE", "SYD")
                .await
                .unwrap()
                .is_empty()
        );

        let relaxed = JourneySearch::with_constraints(
            MockProvider { events },
            JourneyConstraints::new(36, 2, 4).unwrap(),
        );
        assert_eq!(
            relaxed
                .execute("2024-09-12", "BUE", "SYD")
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
