//! Endpoint path templates for ShipStation resource operations.
//!
//! Each remote capability maps to a fixed path relative to the API
//! endpoint. Templates carrying an `{id}` placeholder are resolved with
//! [`substitute`] before a request is built.
//!
//! The mixed casing (`Orders`, `warehouses`, `shipments/getrates`) mirrors
//! the ShipStation documentation; the service routes case-insensitively but
//! the documented spellings are kept as the wire contract.

use std::fmt::Display;

/// List orders matching a filter set.
pub const GET_ORDERS: &str = "Orders";
/// Fetch a single order by ID.
pub const GET_ORDER: &str = "Orders/{id}";
/// Add a tag to an order.
pub const ADD_TAG_TO_ORDER: &str = "Orders/addtag";
/// Create a new order.
pub const ADD_ORDER: &str = "Orders/CreateOrder";
/// Delete an order by ID.
pub const DELETE_ORDER: &str = "Orders/{id}";
/// List shipments matching a filter set.
pub const GET_SHIPMENTS: &str = "Shipments/List";
/// Retrieve shipping rates for given shipping details.
pub const GET_RATES: &str = "shipments/getrates";
/// Create a shipping label.
pub const CREATE_LABEL: &str = "shipments/createLabel";
/// List available warehouses.
pub const GET_WAREHOUSES: &str = "warehouses";
/// List available stores.
pub const GET_STORES: &str = "Stores";
/// List available carriers.
pub const GET_CARRIERS: &str = "carriers";
/// Fetch a single carrier by carrier code.
pub const GET_CARRIER: &str = "carriers/getcarrier";
/// List packages offered by a carrier.
pub const GET_PACKAGES: &str = "carriers/listpackages";
/// List services offered by a carrier.
pub const GET_SERVICES: &str = "carriers/listservices";

/// Substitutes the `{id}` placeholder in a path template with the given
/// identifier.
///
/// Templates carry at most one placeholder; templates without one are
/// returned unchanged.
///
/// # Example
///
/// ```rust
/// use shipstation_api::rest::path;
///
/// assert_eq!(path::substitute(path::GET_ORDER, 123), "Orders/123");
/// assert_eq!(path::substitute(path::GET_WAREHOUSES, 123), "warehouses");
/// ```
#[must_use]
pub fn substitute(template: &str, id: impl Display) -> String {
    template.replace("{id}", &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_replaces_the_placeholder() {
        assert_eq!(substitute(GET_ORDER, 12345), "Orders/12345");
        assert_eq!(substitute(DELETE_ORDER, 9), "Orders/9");
    }

    #[test]
    fn test_substitute_accepts_string_identifiers() {
        assert_eq!(substitute(GET_ORDER, "abc-123"), "Orders/abc-123");
    }

    #[test]
    fn test_substitute_leaves_placeholder_free_templates_unchanged() {
        assert_eq!(substitute(GET_ORDERS, 1), "Orders");
        assert_eq!(substitute(GET_RATES, 1), "shipments/getrates");
    }
}
