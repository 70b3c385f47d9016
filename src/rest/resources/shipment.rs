//! Shipment payload types.

use serde::{Deserialize, Serialize};

use super::common::{Address, Dimensions, InsuranceOptions, Weight};
use crate::rest::pagination::PagedResponse;

/// A ShipStation shipment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipment {
    /// The shipment's internal identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<i64>,

    /// The identifier of the order that was shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// The order key of the order that was shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,

    /// The identifier of the user who created the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// The order number of the order that was shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// When the shipment record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,

    /// The shipment's ship date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<String>,

    /// Cost of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_cost: Option<f64>,

    /// Cost of insurance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_cost: Option<f64>,

    /// The carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// Whether this is a return label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return_label: Option<bool>,

    /// The batch the label was printed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,

    /// Carrier code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,

    /// Service code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,

    /// Package code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,

    /// Delivery confirmation type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// The warehouse the shipment originated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<i64>,

    /// Whether the shipment was voided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voided: Option<bool>,

    /// When the shipment was voided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_date: Option<String>,

    /// Whether the marketplace was notified of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_notified: Option<bool>,

    /// Error message from marketplace notification, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_error_message: Option<String>,

    /// The destination address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<Address>,

    /// Parcel weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,

    /// Parcel dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Insurance settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_options: Option<InsuranceOptions>,

    /// Advanced options, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<serde_json::Value>,

    /// Base64-encoded PDF label data, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_data: Option<String>,

    /// Base64-encoded customs form data, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_data: Option<String>,
}

/// One page of a shipment listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentsPage {
    /// The shipments on this page, in server order.
    pub shipments: Vec<Shipment>,

    /// Total matching shipments across all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    /// The page this payload represents.
    pub page: u32,

    /// Total pages; may be `0` for a single-page result.
    pub pages: u32,
}

impl PagedResponse for ShipmentsPage {
    type Record = Shipment;

    fn page(&self) -> u32 {
        self.page
    }

    fn pages(&self) -> u32 {
        self.pages
    }

    fn into_records(self) -> Vec<Shipment> {
        self.shipments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shipments_page_deserializes_wire_shape() {
        let page: ShipmentsPage = serde_json::from_value(json!({
            "shipments": [
                {
                    "shipmentId": 33974374,
                    "orderId": 43945660,
                    "trackingNumber": "9400111899561704681189",
                    "carrierCode": "stamps_com",
                    "voided": false
                }
            ],
            "total": 1,
            "page": 1,
            "pages": 0
        }))
        .unwrap();

        assert_eq!(page.shipments.len(), 1);
        assert_eq!(page.pages, 0);
        assert_eq!(
            page.shipments[0].tracking_number.as_deref(),
            Some("9400111899561704681189")
        );
    }
}
