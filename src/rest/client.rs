//! The ShipStation API client.
//!
//! [`ShipStation`] owns all per-instance state — credentials, quota
//! bookkeeping, and the most recent application failure — and exposes one
//! short method per remote capability. Every method follows the same
//! sequence: acquire quota, build the request, send it through the
//! transport, normalize the response.
//!
//! Normalization happens exactly once, centrally, for every operation: a
//! 200 response yields the decoded payload, any other status becomes an
//! [`ApiFailure`] that is both returned and retained as the last error,
//! and quota observations are fed back to the governor regardless of
//! status. No operation retries automatically; retries are caller policy.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::clients::{
    ApiFailure, DataType, Error, HttpClient, HttpMethod, HttpRequest, HttpResponse, RateGovernor,
};
use crate::config::{ApiKey, ApiSecret, AuthorizationToken, ShipStationConfig};
use crate::rest::filters::{strip_empty_members, Filters};
use crate::rest::pagination::collect_all;
use crate::rest::path;
use crate::rest::resources::{
    Carrier, CarrierPackage, CarrierService, Label, LabelRequest, Order, OrdersPage, Rate,
    RateRequest, Shipment, ShipmentsPage, Store, SuccessResponse, Warehouse,
};

/// Credential state owned by one client instance.
///
/// The active authorization token is recomputed whenever an assignment
/// completes the key/secret pair, overridden directly for multi-account
/// switching, or reset to the default the instance was configured with.
#[derive(Debug)]
struct CredentialStore {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    authorization: AuthorizationToken,
    default_authorization: AuthorizationToken,
}

/// An async client for the ShipStation API.
///
/// All state is owned by the instance — multiple clients with different
/// accounts coexist safely in one process. The client is `Send + Sync`;
/// the intended usage pattern is nevertheless sequential: each operation
/// completes (including any quota-induced wait) before the next begins.
///
/// # Example
///
/// ```rust,ignore
/// use shipstation_api::{ApiKey, ApiSecret, Filters, ShipStation, ShipStationConfig};
///
/// let config = ShipStationConfig::builder()
///     .api_key(ApiKey::new("your-api-key")?)
///     .api_secret(ApiSecret::new("your-api-secret")?)
///     .build()?;
/// let client = ShipStation::new(config);
///
/// let filters = Filters::new().with("orderStatus", "awaiting_shipment");
/// let orders = client.get_all_orders(&filters).await?;
/// println!("{} orders awaiting shipment", orders.len());
/// ```
#[derive(Debug)]
pub struct ShipStation {
    transport: HttpClient,
    governor: RateGovernor,
    credentials: Mutex<CredentialStore>,
    last_error: Mutex<Option<ApiFailure>>,
}

// Verify ShipStation is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShipStation>();
};

impl ShipStation {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: ShipStationConfig) -> Self {
        let transport = HttpClient::new(config.endpoint().clone());
        let governor = RateGovernor::new(config.request_ceiling());
        let (api_key, api_secret, authorization) = config.into_parts();

        Self {
            transport,
            governor,
            credentials: Mutex::new(CredentialStore {
                api_key,
                api_secret,
                default_authorization: authorization.clone(),
                authorization,
            }),
            last_error: Mutex::new(None),
        }
    }

    // Credential surface ------------------------------------------------

    /// Sets the API key.
    ///
    /// When the API secret is already present, the authorization token is
    /// re-derived from the completed pair.
    pub fn set_api_key(&self, key: ApiKey) {
        let mut credentials = self.lock_credentials();
        if let Some(secret) = credentials.api_secret.clone() {
            credentials.authorization = AuthorizationToken::derive(&key, &secret);
        }
        credentials.api_key = Some(key);
    }

    /// Sets the API secret.
    ///
    /// When the API key is already present, the authorization token is
    /// re-derived from the completed pair.
    pub fn set_api_secret(&self, secret: ApiSecret) {
        let mut credentials = self.lock_credentials();
        if let Some(key) = credentials.api_key.clone() {
            credentials.authorization = AuthorizationToken::derive(&key, &secret);
        }
        credentials.api_secret = Some(secret);
    }

    /// Sets the authorization token directly, allowing fast switching
    /// between ShipStation accounts.
    pub fn set_authorization(&self, token: AuthorizationToken) {
        self.lock_credentials().authorization = token;
    }

    /// Resets the authorization token to the one the client was
    /// configured with.
    pub fn reset_authorization(&self) {
        let mut credentials = self.lock_credentials();
        let default = credentials.default_authorization.clone();
        credentials.authorization = default;
    }

    /// Returns the authorization token currently in use.
    #[must_use]
    pub fn authorization(&self) -> AuthorizationToken {
        self.lock_credentials().authorization.clone()
    }

    // Introspection ------------------------------------------------------

    /// Returns the most recent application failure, if any request has
    /// failed with a non-200 status.
    ///
    /// The value is overwritten by the next failing call and is never
    /// cleared by a success.
    #[must_use]
    pub fn last_error(&self) -> Option<ApiFailure> {
        self.lock_last_error().clone()
    }

    /// Returns the number of requests believed to remain in the current
    /// quota window.
    #[must_use]
    pub fn remaining_requests(&self) -> u32 {
        self.governor.remaining()
    }

    // Order operations ---------------------------------------------------

    /// Lists one page of orders matching the filter set.
    ///
    /// Empty-valued filters are dropped before the request is built; the
    /// remote service rejects empty-valued parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response, [`Error::Transport`]
    /// when no structured response could be obtained.
    pub async fn get_orders(&self, filters: &Filters) -> Result<OrdersPage, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_ORDERS)
            .query(filters.sanitized())
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Lists orders matching the filter set across all pages.
    ///
    /// Pages are fetched sequentially and concatenated in page order,
    /// preserving intra-page order as returned by the server.
    ///
    /// # Errors
    ///
    /// A failure on any page propagates; records from earlier pages are
    /// discarded.
    pub async fn get_all_orders(&self, filters: &Filters) -> Result<Vec<Order>, Error> {
        collect_all(
            |filters| async move { self.get_orders(&filters).await },
            filters.clone(),
        )
        .await
    }

    /// Fetches a single order by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with code 404 when the order does not exist.
    pub async fn get_order(&self, order_id: i64) -> Result<Order, Error> {
        let request =
            HttpRequest::builder(HttpMethod::Get, path::substitute(path::GET_ORDER, order_id))
                .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Adds a tag to an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn add_tag_to_order(
        &self,
        order_id: i64,
        tag_id: i64,
    ) -> Result<SuccessResponse, Error> {
        let request = HttpRequest::builder(HttpMethod::Post, path::ADD_TAG_TO_ORDER)
            .body(json!({ "orderId": order_id, "tagId": tag_id }))
            .body_type(DataType::Json)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Creates a new order, returning the order as the service recorded it.
    ///
    /// Empty members are stripped from the top level of the serialized
    /// order before sending; fields inside nested objects (addresses,
    /// items) are passed through even when empty, matching the remote
    /// service's tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn add_order(&self, order: &Order) -> Result<Order, Error> {
        let body = strip_empty_members(serde_json::to_value(order)?);
        let request = HttpRequest::builder(HttpMethod::Post, path::ADD_ORDER)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Deletes an order by its ID.
    ///
    /// The returned payload carries the service's success flag and
    /// status message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn delete_order(&self, order_id: i64) -> Result<SuccessResponse, Error> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            path::substitute(path::DELETE_ORDER, order_id),
        )
        .build()?;
        Self::decode(self.execute(request).await?)
    }

    // Shipment operations ------------------------------------------------

    /// Lists one page of shipments matching the filter set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_shipments(&self, filters: &Filters) -> Result<ShipmentsPage, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_SHIPMENTS)
            .query(filters.sanitized())
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Lists shipments matching the filter set across all pages.
    ///
    /// # Errors
    ///
    /// A failure on any page propagates; records from earlier pages are
    /// discarded.
    pub async fn get_all_shipments(&self, filters: &Filters) -> Result<Vec<Shipment>, Error> {
        collect_all(
            |filters| async move { self.get_shipments(&filters).await },
            filters.clone(),
        )
        .await
    }

    /// Retrieves shipping rates for the specified shipping details.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_rates(&self, details: &RateRequest) -> Result<Vec<Rate>, Error> {
        let request = HttpRequest::builder(HttpMethod::Post, path::GET_RATES)
            .body(serde_json::to_value(details)?)
            .body_type(DataType::Json)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Creates a shipping label.
    ///
    /// The `label_data` field of the returned [`Label`] is a base64-encoded
    /// PDF; decode and save it to obtain a printable label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn create_label(&self, details: &LabelRequest) -> Result<Label, Error> {
        let request = HttpRequest::builder(HttpMethod::Post, path::CREATE_LABEL)
            .body(serde_json::to_value(details)?)
            .body_type(DataType::Json)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    // Warehouse, store, and carrier operations ---------------------------

    /// Lists the warehouses available on the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_warehouses(&self) -> Result<Vec<Warehouse>, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_WAREHOUSES).build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Lists the stores connected to the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_stores(&self) -> Result<Vec<Store>, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_STORES).build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Lists the carriers available on the account.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_carriers(&self) -> Result<Vec<Carrier>, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_CARRIERS).build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Fetches the carrier matching the provided carrier code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_carrier(&self, carrier_code: &str) -> Result<Carrier, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_CARRIER)
            .query_param("carrierCode", carrier_code)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Lists the packages offered by the given carrier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_packages(&self, carrier_code: &str) -> Result<Vec<CarrierPackage>, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_PACKAGES)
            .query_param("carrierCode", carrier_code)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    /// Lists the services offered by the given carrier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for a non-200 response.
    pub async fn get_services(&self, carrier_code: &str) -> Result<Vec<CarrierService>, Error> {
        let request = HttpRequest::builder(HttpMethod::Get, path::GET_SERVICES)
            .query_param("carrierCode", carrier_code)
            .build()?;
        Self::decode(self.execute(request).await?)
    }

    // Core sequence ------------------------------------------------------

    /// Runs one request through the full sequence: acquire quota, send,
    /// normalize.
    async fn execute(&self, request: HttpRequest) -> Result<serde_json::Value, Error> {
        self.governor.acquire().await;

        let authorization = self.lock_credentials().authorization.clone();
        let response = self.transport.send(&request, &authorization).await?;

        self.normalize(&request.path, response)
    }

    /// Normalizes a structured response into an outcome.
    ///
    /// Quota state is updated from the rate-limit headers and the request
    /// time is stamped regardless of status. A status of exactly 200
    /// yields the decoded body; anything else is recorded as the last
    /// error and returned as a failure.
    fn normalize(&self, request_path: &str, response: HttpResponse) -> Result<serde_json::Value, Error> {
        self.governor.observe(response.rate_limit);

        if response.is_ok() {
            return Ok(response.body);
        }

        let failure = ApiFailure {
            code: response.code,
            headers: response.headers,
            raw_body: response.raw_body,
        };

        tracing::warn!(
            code = failure.code,
            path = request_path,
            "request rejected by ShipStation"
        );
        *self.lock_last_error() = Some(failure.clone());

        Err(Error::Api(failure))
    }

    fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Error> {
        Ok(serde_json::from_value(value)?)
    }

    fn lock_credentials(&self) -> MutexGuard<'_, CredentialStore> {
        self.credentials.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_last_error(&self) -> MutexGuard<'_, Option<ApiFailure>> {
        self.last_error.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
