//! Rate quoting payload types.

use serde::{Deserialize, Serialize};

use super::common::{Dimensions, Weight};

/// The shipping details rates are quoted for.
///
/// Sent as the JSON body of a `get_rates` call. Optional fields are
/// omitted from the body entirely when unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RateRequest {
    /// The carrier to quote.
    pub carrier_code: String,

    /// Restrict the quote to a single service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,

    /// Restrict the quote to a single package type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_code: Option<String>,

    /// Origin postal code.
    pub from_postal_code: String,

    /// Destination state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_state: Option<String>,

    /// Destination country code.
    pub to_country: String,

    /// Destination postal code.
    pub to_postal_code: String,

    /// Destination city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_city: Option<String>,

    /// Parcel weight.
    pub weight: Weight,

    /// Parcel dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Delivery confirmation type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,

    /// Whether the destination is residential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
}

/// A single quoted rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Rate {
    /// Display name of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// Code of the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,

    /// Cost of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_cost: Option<f64>,

    /// Additional costs (e.g., confirmation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_cost: Option<f64>,
}
