//! Error types for requests against the ShipStation API.
//!
//! This module contains the error types produced when a request fails,
//! at whichever layer the failure occurs:
//!
//! - [`ApiFailure`]: A structured response with a non-200 status code
//! - [`InvalidRequestError`]: A request that fails validation before sending
//! - [`Error`]: Unified error type encompassing all request-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::Error;
//!
//! match client.get_order(12345).await {
//!     Ok(order) => println!("Order: {:?}", order.order_number),
//!     Err(Error::Api(failure)) => {
//!         println!("API error {}: {}", failure.code, failure.raw_body);
//!     }
//!     Err(Error::Transport(e)) => {
//!         println!("Transport error: {}", e);
//!     }
//!     Err(other) => println!("{}", other),
//! }
//! ```

use std::collections::HashMap;

use thiserror::Error;

/// A structured application-level failure from the ShipStation API.
///
/// Any response with a status code other than 200 normalizes into this
/// type. The most recent failure is also retained by the client and can be
/// retrieved at any time via `ShipStation::last_error`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ShipStation API returned status {code}: {raw_body}")]
pub struct ApiFailure {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Response headers, with lowercased names.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body, which carries a human-readable message.
    pub raw_body: String,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all request-level errors.
///
/// This enum provides a single error type for client operations. Quota
/// exhaustion never appears here: the rate governor handles it by waiting,
/// not by failing.
#[derive(Debug, Error)]
pub enum Error {
    /// The API returned a structured response with a non-200 status code.
    #[error(transparent)]
    Api(#[from] ApiFailure),

    /// The transport layer failed to produce a structured response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A payload did not convert to or from the expected shape.
    #[error("failed to convert payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns the API failure, if this error is an application-level one.
    #[must_use]
    pub const fn as_api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Api(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failure_message_includes_code_and_body() {
        let failure = ApiFailure {
            code: 422,
            headers: HashMap::new(),
            raw_body: r#"{"Message":"bad request"}"#.to_string(),
        };
        let message = failure.to_string();
        assert!(message.contains("422"));
        assert!(message.contains("bad request"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_as_api_failure() {
        let error = Error::Api(ApiFailure {
            code: 404,
            headers: HashMap::new(),
            raw_body: String::new(),
        });
        assert_eq!(error.as_api_failure().map(|f| f.code), Some(404));

        let error = Error::InvalidRequest(InvalidRequestError::MissingBodyType);
        assert!(error.as_api_failure().is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let failure: &dyn std::error::Error = &ApiFailure {
            code: 400,
            headers: HashMap::new(),
            raw_body: "test".to_string(),
        };
        let _ = failure;

        let invalid: &dyn std::error::Error = &InvalidRequestError::MissingBodyType;
        let _ = invalid;
    }
}
