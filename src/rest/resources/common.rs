//! Shared payload types used across resources.
//!
//! These types are external data contracts: they mirror the shapes the
//! ShipStation API exchanges and are passed through without validation.
//! Optional fields are true optionals — an absent field is `None`, never
//! an empty sentinel value.

use serde::{Deserialize, Serialize};

/// A postal address, used for billing, shipping, and warehouse origins.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Name of the addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,

    /// Second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,

    /// Third street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Whether the address is residential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
}

/// A parcel weight.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Weight {
    /// The weight value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// The weight units (`pounds`, `ounces`, or `grams`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// Parcel dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Dimensions {
    /// The dimension units (`inches` or `centimeters`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Shipment insurance settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InsuranceOptions {
    /// The insurance provider (`shipsurance` or `carrier`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Whether the shipment should be insured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insure_shipment: Option<bool>,

    /// The declared value to insure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured_value: Option<f64>,
}

/// The `{ success, message }` payload returned by delete and action
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SuccessResponse {
    /// Whether the operation succeeded.
    pub success: bool,

    /// A human-readable status message.
    pub message: String,
}
