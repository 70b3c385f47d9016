//! # ShipStation API Rust Client
//!
//! An async Rust client for the [ShipStation](https://www.shipstation.com)
//! REST API, covering orders, shipments, rates, labels, warehouses, stores,
//! and carriers.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShipStationConfig`] and its builder
//! - Validated newtypes for API credentials, with the Basic authorization
//!   token derived automatically from a key/secret pair
//! - Automatic pacing against ShipStation's per-minute request quota: when
//!   the quota is exhausted the client waits out the reset window instead
//!   of failing
//! - Sanitized, insertion-ordered [`Filters`] for list operations
//! - Transparent aggregation of paged results via the `get_all_*` methods
//! - A single outcome model: every operation returns `Result<T, Error>`,
//!   and the most recent API failure stays inspectable via
//!   [`ShipStation::last_error`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shipstation_api::{ApiKey, ApiSecret, Filters, ShipStation, ShipStationConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ShipStationConfig::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .api_secret(ApiSecret::new("your-api-secret")?)
//!     .build()?;
//!
//! let client = ShipStation::new(config);
//!
//! // List every order awaiting shipment, across all pages
//! let filters = Filters::new().with("orderStatus", "awaiting_shipment");
//! let orders = client.get_all_orders(&filters).await?;
//!
//! for order in &orders {
//!     println!("{:?}", order.order_number);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations fail explicitly: a non-200 response becomes
//! [`Error::Api`](Error) carrying the status code, headers, and raw body,
//! and is also retained as the client's last error. A transport-level
//! failure (connectivity, malformed reply) is a distinct
//! [`Error::Transport`](Error) and leaves quota state and the last error
//! untouched.
//!
//! ```rust,ignore
//! match client.get_order(12345).await {
//!     Ok(order) => println!("{:?}", order.order_status),
//!     Err(shipstation_api::Error::Api(failure)) => {
//!         eprintln!("rejected with status {}: {}", failure.code, failure.raw_body);
//!     }
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! ShipStation reports the remaining quota and the window reset time on
//! every response. The client records both and, once the quota is
//! exhausted, suspends the next operation for the remainder of the window.
//! Quota exhaustion is therefore never surfaced as an error. Enforcement
//! is reactive — it prevents sustained overrun, not every single overage.
//!
//! ## Multiple Accounts
//!
//! Every piece of state (credentials, quota bookkeeping, last error) is
//! owned by the [`ShipStation`] instance, so clients for different
//! accounts coexist safely. A single client can also switch accounts by
//! overriding the authorization token directly:
//!
//! ```rust,ignore
//! client.set_authorization(other_account_token);
//! // ...requests for the other account...
//! client.reset_authorization();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: all state lives on the client instance
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Explicit outcomes**: failures are values, never silent sentinels

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiKey, ApiSecret, AuthorizationToken, Endpoint, ShipStationConfig, ShipStationConfigBuilder,
    DEFAULT_REQUEST_CEILING,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiFailure, DataType, Error, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidRequestError, RateGovernor, RateLimit,
};

// Re-export the resource layer
pub use rest::resources::{
    Address, Carrier, CarrierPackage, CarrierService, Dimensions, InsuranceOptions, Label,
    LabelRequest, Order, OrderItem, OrdersPage, Rate, RateRequest, Shipment, ShipmentsPage, Store,
    SuccessResponse, Warehouse, Weight,
};
pub use rest::{FilterValue, Filters, PagedResponse, ShipStation};
