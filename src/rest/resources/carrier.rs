//! Carrier payload types.

use serde::{Deserialize, Serialize};

/// A shipping carrier connected to the ShipStation account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Carrier {
    /// The carrier's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The carrier's code, used to address carrier sub-resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The account number with the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Whether the carrier requires a funded account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_funded_account: Option<bool>,

    /// The current account balance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,

    /// An account nickname, if one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// The shipping provider's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_provider_id: Option<i64>,

    /// Whether this is the primary account with the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

/// A package type offered by a carrier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CarrierPackage {
    /// The carrier offering the package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,

    /// The package's code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The package's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the package can be used domestically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domestic: Option<bool>,

    /// Whether the package can be used internationally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international: Option<bool>,
}

/// A service offered by a carrier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CarrierService {
    /// The carrier offering the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,

    /// The service's code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The service's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the service ships domestically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domestic: Option<bool>,

    /// Whether the service ships internationally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international: Option<bool>,
}
