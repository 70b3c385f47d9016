//! Order payload types.
//!
//! Orders are the richest payload the API exchanges. The shapes here are
//! pass-through contracts: every field is optional and unvalidated, and
//! date fields are opaque strings in the format the service emits.

use serde::{Deserialize, Serialize};

use super::common::{Address, Dimensions, InsuranceOptions, Weight};
use crate::rest::pagination::PagedResponse;

/// A ShipStation order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// The order's internal identifier, assigned by ShipStation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The order number shown to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// The caller-supplied idempotency key for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,

    /// When the order was placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    /// When the order record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,

    /// When the order record was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<String>,

    /// When the order was paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,

    /// The order status (`awaiting_payment`, `awaiting_shipment`,
    /// `shipped`, `on_hold`, `cancelled`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,

    /// The customer's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// The customer's username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_username: Option<String>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// The billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<Address>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<Address>,

    /// The order's line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,

    /// The order total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_total: Option<f64>,

    /// The amount paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,

    /// The tax amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,

    /// The shipping amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<f64>,

    /// Notes left by the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_notes: Option<String>,

    /// Internal notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,

    /// Whether the order is a gift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift: Option<bool>,

    /// Gift message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,

    /// Payment method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// The shipping service requested by the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_shipping_service: Option<String>,

    /// Carrier code for fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,

    /// Service code for fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,

    /// Package code for fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,

    /// Delivery confirmation type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// Planned ship date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<String>,

    /// Date the order is held until.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_until_date: Option<String>,

    /// Parcel weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// Parcel dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Insurance settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_options: Option<InsuranceOptions>,

    /// International shipping settings, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_options: Option<serde_json::Value>,

    /// Advanced options, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<serde_json::Value>,

    /// Identifiers of tags applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItem {
    /// The line item's internal identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<i64>,

    /// The caller-supplied line item key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_key: Option<String>,

    /// The item's SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The item's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL of the item's image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The item's weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// Quantity ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Tax charged for the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,

    /// Shipping charged for the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<f64>,

    /// The item's warehouse location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,

    /// Item options, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,

    /// The product's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    /// The SKU used for fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_sku: Option<String>,

    /// Whether the line is an adjustment rather than a real item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<bool>,

    /// The item's UPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

/// One page of an order listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersPage {
    /// The orders on this page, in server order.
    pub orders: Vec<Order>,

    /// Total matching orders across all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// The page this payload represents.
    pub page: u32,

    /// Total pages; may be `0` for a single-page result.
    pub pages: u32,
}

impl PagedResponse for OrdersPage {
    type Record = Order;

    fn page(&self) -> u32 {
        self.page
    }

    fn pages(&self) -> u32 {
        self.pages
    }

    fn into_records(self) -> Vec<Order> {
        self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_deserializes_wire_shape() {
        let order: Order = serde_json::from_value(json!({
            "orderId": 94113592,
            "orderNumber": "TEST-ORDER-API-DOCS",
            "orderStatus": "awaiting_shipment",
            "orderDate": "2015-06-29T08:46:27.0000000",
            "shipTo": {
                "name": "The President",
                "street1": "1600 Pennsylvania Ave",
                "city": "Washington",
                "state": "DC",
                "postalCode": "20500",
                "country": "US"
            },
            "items": [
                {"sku": "ABC123", "name": "Test item #1", "quantity": 1, "unitPrice": 99.99}
            ],
            "orderTotal": 194.43,
            "tagIds": [53974]
        }))
        .unwrap();

        assert_eq!(order.order_id, Some(94113592));
        assert_eq!(order.order_status.as_deref(), Some("awaiting_shipment"));
        assert_eq!(
            order.ship_to.as_ref().and_then(|a| a.postal_code.as_deref()),
            Some("20500")
        );
        assert_eq!(order.items.as_ref().map(Vec::len), Some(1));
        assert_eq!(order.tag_ids, Some(vec![53974]));
    }

    #[test]
    fn test_none_fields_are_absent_from_serialization() {
        let order = Order {
            order_number: Some("TEST-1".to_string()),
            ..Order::default()
        };

        let value = serde_json::to_value(&order).unwrap();
        let members = value.as_object().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(value["orderNumber"], "TEST-1");
    }

    #[test]
    fn test_orders_page_tolerates_missing_cursor_fields() {
        let page: OrdersPage = serde_json::from_value(json!({
            "orders": [{"orderId": 1}]
        }))
        .unwrap();

        assert_eq!(page.orders.len(), 1);
        assert_eq!(page.page, 0);
        assert_eq!(page.pages, 0);
    }
}
