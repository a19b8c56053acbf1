//! Journey constraints.

/// Error returned when constructing invalid constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid constraints: {reason}")]
pub struct InvalidConstraints {
    reason: &'static str,
}

/// Limits a journey is checked against.
///
/// All three values are validated at construction: the duration and
/// connection-gap limits must be strictly positive, the connection count
/// must be non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyConstraints {
    max_duration_hours: i64,
    max_connections: i64,
    max_connection_hours: i64,
}

impl JourneyConstraints {
    /// Create constraints with the given limits.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `max_duration_hours` or `max_connection_hours` is
    /// not strictly positive, or `max_connections` is negative.
    pub fn new(
        max_duration_hours: i64,
        max_connections: i64,
        max_connection_hours: i64,
    ) -> Result<Self, InvalidConstraints> {
        if max_duration_hours <= 0 {
            return Err(InvalidConstraints {
                reason: "max duration must be positive",
            });
        }
        if max_connections < 0 {
            return Err(InvalidConstraints {
                reason: "max connections must not be negative",
            });
        }
        if max_connection_hours <= 0 {
            return Err(InvalidConstraints {
                reason: "max connection time must be positive",
            });
        }

        Ok(Self {
            max_duration_hours,
            max_connections,
            max_connection_hours,
        })
    }

    /// Maximum total journey duration, in whole hours.
    pub fn max_duration_hours(&self) -> i64 {
        self.max_duration_hours
    }

    /// Maximum number of connections.
    ///
    /// Carried and validated, but not consulted by journey validation: the
    /// two-flight cap is a fixed structural limit.
    pub fn max_connections(&self) -> i64 {
        self.max_connections
    }

    /// Maximum gap between one flight's arrival and the next one's
    /// departure, in whole hours.
    pub fn max_connection_hours(&self) -> i64 {
        self.max_connection_hours
    }
}

impl Default for JourneyConstraints {
    fn default() -> Self {
        Self {
            max_duration_hours: 24,
            max_connections: 2,
            max_connection_hours: 4,
        }
    }
}
