//! Shipping label payload types.

use serde::{Deserialize, Serialize};

use super::common::{Address, Dimensions, InsuranceOptions, Weight};

/// The shipping details a label is created from.
///
/// Sent as the JSON body of a `create_label` call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelRequest {
    /// Carrier to ship with.
    pub carrier_code: String,

    /// Service to ship with.
    pub service_code: String,

    /// Package type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,

    /// Delivery confirmation type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// The date the shipment will ship.
    pub ship_date: String,

    /// Parcel weight.
    pub weight: Weight,

    /// Parcel dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// The origin address.
    pub ship_from: Address,

    /// The destination address.
    pub ship_to: Address,

    /// Insurance settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_options: Option<InsuranceOptions>,

    /// International shipping settings, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_options: Option<serde_json::Value>,

    /// Advanced options, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<serde_json::Value>,

    /// Whether to create a test label that will not be charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_label: Option<bool>,
}

/// A created shipping label.
///
/// `label_data` is a base64-encoded PDF; decode and save it to obtain a
/// printable label.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    /// The shipment created for the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<i64>,

    /// Cost of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_cost: Option<f64>,

    /// Cost of insurance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_cost: Option<f64>,

    /// The carrier tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// Base64-encoded PDF label data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_data: Option<String>,

    /// Base64-encoded customs form data, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_deserializes_wire_shape() {
        let label: Label = serde_json::from_value(json!({
            "shipmentId": 72513480,
            "shipmentCost": 7.3,
            "insuranceCost": 0,
            "trackingNumber": "248201115029520",
            "labelData": "JVBERi0xLjQKJeLjz9MKMyAwIG9iago8PC9UeXBlIC9QYWdlCi",
            "formData": null
        }))
        .unwrap();

        assert_eq!(label.shipment_id, Some(72513480));
        assert!(label.label_data.unwrap().starts_with("JVBERi0x"));
        assert!(label.form_data.is_none());
    }
}
