//! Error types and handling for the Kisan Dost service

use thiserror::Error;

/// Why an outbound forecast request did not produce usable data.
///
/// Only logged; callers of the fetcher see a plain "unavailable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    /// Connection could not be established or was reset
    Network,
    /// The bounded wait elapsed
    Timeout,
    /// Provider answered with a non-success status
    Status(u16),
    /// Body could not be read or decoded
    Parse,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiFailure::Network => f.write_str("network"),
            ApiFailure::Timeout => f.write_str("timeout"),
            ApiFailure::Status(code) => write!(f, "status {code}"),
            ApiFailure::Parse => f.write_str("parse"),
        }
    }
}

/// Main error type for the Kisan Dost service
#[derive(Error, Debug)]
pub enum KisanError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather provider communication errors
    #[error("API error ({kind}): {message}")]
    Api { kind: ApiFailure, message: String },

    /// Snapshot persistence errors
    #[error("Snapshot error: {message}")]
    Snapshot { message: String },

    /// JSON encoding/decoding errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl KisanError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(kind: ApiFailure, message: S) -> Self {
        Self::Api {
            kind,
            message: message.into(),
        }
    }

    /// Create a new snapshot error
    pub fn snapshot<S: Into<String>>(message: S) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    /// Classify a transport error from the HTTP client.
    ///
    /// The request URL carries the credential, so it is stripped before the
    /// error is rendered.
    #[must_use]
    pub fn from_transport(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ApiFailure::Timeout
        } else if err.is_decode() || err.is_body() {
            ApiFailure::Parse
        } else {
            ApiFailure::Network
        };
        Self::api(kind, err.without_url().to_string())
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            KisanError::Config { message } => {
                format!("Configuration error: {message}. Please check your .env file and API_KEY.")
            }
            KisanError::Api { .. } => {
                "Unable to reach the weather provider. Serving fallback forecast.".to_string()
            }
            KisanError::Snapshot { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            KisanError::Serialization { .. } => "Invalid data format.".to_string(),
        }
    }
}
