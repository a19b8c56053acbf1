//! Flight number (flight designator) type.

use std::fmt;

/// Error returned when parsing an invalid flight number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight number: {reason}")]
pub struct InvalidFlightNumber {
    reason: &'static str,
}

/// A validated flight number.
///
/// Flight numbers follow the format: two uppercase letters (the carrier
/// designator) followed by exactly four digits (e.g., "IB1234").
///
/// # Examples
///
/// ```
/// use flight_server::domain::FlightNumber;
///
/// let fnum = FlightNumber::parse("IB1234").unwrap();
/// assert_eq!(fnum.as_str(), "IB1234");
/// assert_eq!(fnum.carrier(), "IB");
///
/// // Too few or too many digits are rejected
/// assert!(FlightNumber::parse("IB123").is_err());
/// assert!(FlightNumber::parse("IB12345").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightNumber([u8; 6]);

impl FlightNumber {
    /// Parse a flight number from a string.
    ///
    /// The input must be 2 uppercase ASCII letters followed by 4 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidFlightNumber> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidFlightNumber {
                reason: "must be exactly 6 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() || !bytes[1].is_ascii_uppercase() {
            return Err(InvalidFlightNumber {
                reason: "must start with 2 uppercase letters",
            });
        }

        for &b in &bytes[2..] {
            if !b.is_ascii_digit() {
                return Err(InvalidFlightNumber {
                    reason: "must end with 4 digits",
                });
            }
        }

        Ok(FlightNumber([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5],
        ]))
    }

    /// Returns the flight number as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII characters
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the carrier designator (first two letters).
    pub fn carrier(&self) -> &str {
        &self.as_str()[..2]
    }
}

impl fmt::Debug for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightNumber({})", self.as_str())
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
