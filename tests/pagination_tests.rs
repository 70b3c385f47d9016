//! Integration tests for multi-page aggregation.
//!
//! These tests simulate paged listings with a wiremock server and verify
//! the aggregation behavior end to end: page order, the advancing page
//! filter, and the `pages == 0` single-page quirk.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shipstation_api::{
    ApiKey, ApiSecret, Endpoint, Error, Filters, ShipStation, ShipStationConfig,
};

fn test_client(server: &MockServer) -> ShipStation {
    let config = ShipStationConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret(ApiSecret::new("test-secret").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ShipStation::new(config)
}

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("X-Rate-Limit-Remaining", "39")
        .insert_header("X-Rate-Limit-Reset", "60")
}

#[tokio::test]
async fn test_get_all_orders_concatenates_pages_in_order() {
    let server = MockServer::start().await;

    // Page-specific mocks are mounted first; wiremock picks the first
    // mounted mock whose matchers all pass.
    Mock::given(method("GET"))
        .and(path("/Orders"))
        .and(query_param("page", "2"))
        .respond_with(ok(json!({
            "orders": [{"orderId": 3, "orderNumber": "A-3"}],
            "total": 5, "page": 2, "pages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Orders"))
        .and(query_param("page", "3"))
        .respond_with(ok(json!({
            "orders": [
                {"orderId": 4, "orderNumber": "A-4"},
                {"orderId": 5, "orderNumber": "A-5"}
            ],
            "total": 5, "page": 3, "pages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Orders"))
        .respond_with(ok(json!({
            "orders": [
                {"orderId": 1, "orderNumber": "A-1"},
                {"orderId": 2, "orderNumber": "A-2"}
            ],
            "total": 5, "page": 1, "pages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let filters = Filters::new().with("orderStatus", "shipped");

    let orders = client.get_all_orders(&filters).await.unwrap();

    // Sum of per-page record counts, in page order then intra-page order
    let ids: Vec<i64> = orders.iter().filter_map(|o| o.order_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    // The first request carries no page filter (server default, page 1)
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let first_query = requests[0].url.query().unwrap_or_default();
    assert!(!first_query.contains("page="));
    assert!(first_query.contains("orderStatus=shipped"));
}

#[tokio::test]
async fn test_zero_total_pages_issues_exactly_one_request() {
    let server = MockServer::start().await;

    // A single-page result may report pages as 0; that means "no further
    // pages", not "zero pages exist".
    Mock::given(method("GET"))
        .and(path("/Orders"))
        .respond_with(ok(json!({
            "orders": [
                {"orderId": 7, "orderNumber": "B-7"},
                {"orderId": 8, "orderNumber": "B-8"}
            ],
            "total": 2, "page": 1, "pages": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let orders = client.get_all_orders(&Filters::new()).await.unwrap();

    assert_eq!(orders.len(), 2);
    // The .expect(1) above verifies no extra fetch was issued
}

#[tokio::test]
async fn test_get_all_shipments_walks_the_shipment_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Shipments/List"))
        .and(query_param("page", "2"))
        .respond_with(ok(json!({
            "shipments": [{"shipmentId": 12, "trackingNumber": "T-12"}],
            "total": 2, "page": 2, "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Shipments/List"))
        .respond_with(ok(json!({
            "shipments": [{"shipmentId": 11, "trackingNumber": "T-11"}],
            "total": 2, "page": 1, "pages": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let shipments = client.get_all_shipments(&Filters::new()).await.unwrap();

    let ids: Vec<i64> = shipments.iter().filter_map(|s| s.shipment_id).collect();
    assert_eq!(ids, vec![11, 12]);
}

#[tokio::test]
async fn test_a_failing_first_page_propagates_as_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.get_all_orders(&Filters::new()).await;

    assert!(matches!(result, Err(Error::Api(failure)) if failure.code == 500));
    assert_eq!(client.last_error().unwrap().code, 500);
}

#[tokio::test]
async fn test_an_empty_listing_yields_an_empty_vector() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Shipments/List"))
        .respond_with(ok(json!({
            "shipments": [], "total": 0, "page": 1, "pages": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let shipments = client.get_all_shipments(&Filters::new()).await.unwrap();

    assert!(shipments.is_empty());
}
