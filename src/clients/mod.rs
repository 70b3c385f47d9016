//! HTTP client types for ShipStation API communication.
//!
//! This module provides the foundational layer under the resource
//! operations: a transport that performs one request at a time, the
//! request/response types it exchanges, and the rate governor that paces
//! outbound requests against ShipStation's per-minute quota.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`RateLimit`]: Quota values parsed from response headers
//! - [`RateGovernor`]: Blocks callers while the quota window resets
//! - [`Error`]: Unified request-level error type
//!
//! # Layering
//!
//! The transport itself is deliberately dumb: one request in, one response
//! out, no retries, no rate awareness. The [`RateGovernor`] gates requests
//! before they reach the transport, and the `ShipStation` client normalizes
//! every response exactly once, feeding quota observations back to the
//! governor regardless of response status.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rate_limit;

pub use errors::{ApiFailure, Error, InvalidRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use rate_limit::RateGovernor;
