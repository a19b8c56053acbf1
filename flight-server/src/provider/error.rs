//! Flight-events client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the flight-events HTTP client.
#[derive(Debug)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Upstream data failed domain validation
    InvalidData(ConversionError),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "HTTP error: {e}"),
            ProviderError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ProviderError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            ProviderError::RateLimited => write!(f, "rate limited by flight events API"),
            ProviderError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            ProviderError::InvalidData(e) => write!(f, "invalid flight event data: {e}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(e) => Some(e),
            ProviderError::InvalidData(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

impl From<ConversionError> for ProviderError {
    fn from(err: ConversionError) -> Self {
        ProviderError::InvalidData(err)
    }
}
