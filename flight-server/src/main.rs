use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use flight_server::planner::{FlightEventsProvider, JourneySearch};
use flight_server::provider::{FlightsApiClient, FlightsApiConfig, MockFlightEventsProvider};
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    // Mock mode: serve fixture data without upstream credentials.
    if let Ok(fixture) = std::env::var("FLIGHTS_MOCK_DATA") {
        let provider = MockFlightEventsProvider::from_file(&fixture)
            .expect("Failed to load mock flight data");
        tracing::info!(%fixture, events = provider.len(), "using mock flight data");

        serve(AppState::new(JourneySearch::new(provider)), addr).await;
        return;
    }

    // Get upstream configuration from environment
    let base_url = std::env::var("FLIGHTS_API_URL").unwrap_or_else(|_| {
        eprintln!("Warning: FLIGHTS_API_URL not set. API calls will fail.");
        String::new()
    });
    let api_key = std::env::var("FLIGHTS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: FLIGHTS_API_KEY not set. API calls will fail.");
        String::new()
    });

    let config = FlightsApiConfig::new(base_url, api_key);
    let client = FlightsApiClient::new(config).expect("Failed to create flight events client");

    serve(AppState::new(JourneySearch::new(client)), addr).await;
}

/// Bind and run the HTTP server.
async fn serve<P>(state: AppState<P>, addr: SocketAddr)
where
    P: FlightEventsProvider + Send + Sync + 'static,
{
    let app = create_router(state);

    println!("Flight journey search listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                  - Health check");
    println!("  GET /api/v1/journeys/search  - Search journeys (date, departureCity, arrivalCity)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
