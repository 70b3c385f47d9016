//! Warehouse payload types.

use serde::{Deserialize, Serialize};

use super::common::Address;

/// A ShipStation ship-from warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Warehouse {
    /// The warehouse's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,

    /// The warehouse's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,

    /// The address shipments originate from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,

    /// The address returns are sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<Address>,

    /// When the warehouse was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,

    /// Whether this is the default warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_warehouse_deserializes_wire_shape() {
        let warehouse: Warehouse = serde_json::from_value(json!({
            "warehouseId": 12345,
            "warehouseName": "API Ship From Location",
            "originAddress": {
                "name": "API Warehouse",
                "street1": "600 Congress Ave",
                "city": "Austin",
                "state": "TX",
                "postalCode": "78701",
                "country": "US"
            },
            "isDefault": true
        }))
        .unwrap();

        assert_eq!(warehouse.warehouse_id, Some(12345));
        assert_eq!(warehouse.is_default, Some(true));
        assert_eq!(
            warehouse
                .origin_address
                .as_ref()
                .and_then(|a| a.city.as_deref()),
            Some("Austin")
        );
    }
}
