//! Store payload types.

use serde::{Deserialize, Serialize};

/// A marketplace store connected to the ShipStation account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Store {
    /// The store's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,

    /// The store's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,

    /// The marketplace's identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<i64>,

    /// The marketplace's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_name: Option<String>,

    /// The account name on the marketplace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// The store's contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The integration URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_url: Option<String>,

    /// Whether the store is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Company name shown on the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Phone number shown on the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Public contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_email: Option<String>,

    /// Store website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// When the store was last refreshed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_date: Option<String>,

    /// When a refresh was last attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refresh_attempt: Option<String>,

    /// When the store was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,

    /// When the store was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<String>,

    /// Whether the store refreshes automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_refresh: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_deserializes_wire_shape() {
        let store: Store = serde_json::from_value(json!({
            "storeId": 22766,
            "storeName": "ShipStation Manual Store",
            "marketplaceId": 0,
            "marketplaceName": "ShipStation",
            "active": true,
            "autoRefresh": false
        }))
        .unwrap();

        assert_eq!(store.store_id, Some(22766));
        assert_eq!(store.marketplace_name.as_deref(), Some("ShipStation"));
        assert_eq!(store.auto_refresh, Some(false));
    }
}
