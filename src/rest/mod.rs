//! The resource layer of the ShipStation client.
//!
//! This module hosts everything above the raw transport:
//!
//! - **[`ShipStation`]**: the client, one short method per remote capability
//! - **[`Filters`]**: insertion-ordered, sanitized filter sets for list operations
//! - **[`PagedResponse`]** and the page aggregation driving `get_all_*`
//! - **[`path`]**: endpoint path templates and `{id}` substitution
//! - **[`resources`]**: typed pass-through payloads (orders, shipments,
//!   rates, labels, warehouses, stores, carriers)
//!
//! # Example
//!
//! ```rust,ignore
//! use shipstation_api::{Filters, ShipStation};
//!
//! let filters = Filters::new()
//!     .with("orderStatus", "awaiting_shipment")
//!     .with("storeId", 12345);
//!
//! // One page...
//! let page = client.get_orders(&filters).await?;
//! println!("page {} of {}", page.page, page.pages);
//!
//! // ...or every page, concatenated in server order.
//! let all = client.get_all_orders(&filters).await?;
//! ```

mod client;
mod filters;
mod pagination;

pub mod path;
pub mod resources;

pub use client::ShipStation;
pub use filters::{FilterValue, Filters};
pub use pagination::PagedResponse;
