//! Error types for RandomWord

use thiserror::Error;

/// Boxed cause carried by [`RandomWordError::Internal`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while configuring or fetching a request
#[derive(Debug, Error)]
pub enum RandomWordError {
    /// A request option was rejected during configuration
    ///
    /// Carries the name of the offending field (`number`, `length`,
    /// `language` or `transport`). Never returned by a fetch.
    #[error("Invalid argument: {}", describe_field(.0))]
    InvalidArgument(&'static str),

    /// Server answered with a non-200 status or an empty body
    #[error("Unexpected response from server (status {status})")]
    UnexpectedResponse {
        /// HTTP status code of the response
        status: u16,
    },

    /// Request construction, transport, body read or decode failure
    #[error("Internal error: {0}")]
    Internal(#[source] BoxError),
}

impl RandomWordError {
    /// Wrap any error as [`RandomWordError::Internal`]
    pub fn internal(err: impl Into<BoxError>) -> Self {
        RandomWordError::Internal(err.into())
    }

    /// True for configuration errors
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RandomWordError::InvalidArgument(_))
    }

    /// True for non-200 statuses and empty bodies
    pub fn is_unexpected_response(&self) -> bool {
        matches!(self, RandomWordError::UnexpectedResponse { .. })
    }

    /// True for transport, read and decode failures
    pub fn is_internal(&self) -> bool {
        matches!(self, RandomWordError::Internal(_))
    }
}

fn describe_field(field: &str) -> String {
    match field {
        "number" => "number must be greater than 0".to_string(),
        "length" => "length must be greater than 0".to_string(),
        "language" => "unsupported language".to_string(),
        "transport" => "transport cannot be empty".to_string(),
        other => other.to_string(),
    }
}
