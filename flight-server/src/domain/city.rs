//! City code type.

use std::fmt;

/// Error returned when parsing an invalid city code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city code: {reason}")]
pub struct InvalidCityCode {
    reason: &'static str,
}

/// A valid 3-letter IATA-style city code.
///
/// City codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `CityCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_server::domain::CityCode;
///
/// let mad = CityCode::parse("MAD").unwrap();
/// assert_eq!(mad.as_str(), "MAD");
///
/// // Lowercase is rejected
/// assert!(CityCode::parse("mad").is_err());
///
/// // Wrong length is rejected
/// assert!(CityCode::parse("MA").is_err());
/// assert!(CityCode::parse("MADR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CityCode([u8; 3]);

impl CityCode {
    /// Parse a city code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCityCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCityCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCityCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(CityCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the city code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityCode({})", self.as_str())
    }
}

impl fmt::Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(CityCode::parse("MAD").is_ok());
        assert!(CityCode::parse("BUE").is_ok());
        assert!(CityCode::parse("BCN").is_ok());
        assert!(CityCode::parse("AAA").is_ok());
        assert!(CityCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(CityCode::parse("mad").is_err());
        assert!(CityCode::parse("Mad").is_err());
        assert!(CityCode::parse("MAd").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(CityCode::parse("").is_err());
        assert!(CityCode::parse("M").is_err());
        assert!(CityCode::parse("MA").is_err());
        assert!(CityCode::parse("MADR").is_err());
        assert!(CityCode::parse("MADRID").is_err());
    }

    #[test]
    fn reject_digits_and_symbols() {
        assert!(CityCode::parse("M1D").is_err());
        assert!(CityCode::parse("M-D").is_err());
        assert!(CityCode::parse("M D").is_err());
        assert!(CityCode::parse("MÁD").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = CityCode::parse("BUE").unwrap();
        assert_eq!(code.as_str(), "BUE");
    }

    #[test]
    fn display_and_debug() {
        let code = CityCode::parse("BCN").unwrap();
        assert_eq!(format!("{}", code), "BCN");
        assert_eq!(format!("{:?}", code), "CityCode(BCN)");
    }

    #[test]
    fn equality() {
        let a = CityCode::parse("MAD").unwrap();
        let b = CityCode::parse("MAD").unwrap();
        let c = CityCode::parse("BUE").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CityCode::parse("MAD").unwrap());
        assert!(set.contains(&CityCode::parse("MAD").unwrap()));
        assert!(!set.contains(&CityCode::parse("BUE").unwrap()));
    }
}
