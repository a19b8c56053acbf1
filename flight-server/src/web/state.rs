//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::JourneySearch;

/// Shared application state.
///
/// Holds the journey search, generic over the flight-events provider so
/// the same router serves both the live client and fixture data.
pub struct AppState<P> {
    /// The journey search use case
    pub search: Arc<JourneySearch<P>>,
}

impl<P> AppState<P> {
    /// Create a new app state.
    pub fn new(search: JourneySearch<P>) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}

// Manual impl: the derive would require P: Clone, which the Arc makes
// unnecessary.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
        }
    }
}
