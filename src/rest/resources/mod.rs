//! Payload types for ShipStation resources.
//!
//! These are external data contracts: structs mirroring what the API
//! exchanges, passed through without validation. Every field the remote
//! service may omit is an `Option`, and unset fields are omitted from
//! serialized requests rather than sent as empty sentinels. Date fields
//! are opaque strings in the service's own format.

mod carrier;
mod common;
mod label;
mod order;
mod rate;
mod shipment;
mod store;
mod warehouse;

pub use carrier::{Carrier, CarrierPackage, CarrierService};
pub use common::{Address, Dimensions, InsuranceOptions, SuccessResponse, Weight};
pub use label::{Label, LabelRequest};
pub use order::{Order, OrderItem, OrdersPage};
pub use rate::{Rate, RateRequest};
pub use shipment::{Shipment, ShipmentsPage};
pub use store::Store;
pub use warehouse::Warehouse;
