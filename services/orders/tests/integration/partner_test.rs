use axum::http::StatusCode;
use serde_json::Value;

use storefront_orders::domain::repository::CustomerLookupPort;
use storefront_orders::error::OrdersServiceError;
use storefront_testing::fixture::{TEST_PHONE, partner_customer, partner_customers, partner_result};
use storefront_testing::stub::unreachable_base_url;

use crate::helpers::{partner_client, spawn_partner};

#[tokio::test]
async fn should_return_first_customer_on_success() {
    let stub = spawn_partner(
        StatusCode::OK,
        (
            StatusCode::OK,
            partner_customers(vec![
                partner_customer(1, TEST_PHONE),
                partner_customer(2, TEST_PHONE),
            ]),
        ),
    )
    .await;
    let client = partner_client(stub.server.base_url());

    let customer = client.find_customer_by_phone(TEST_PHONE).await.unwrap().unwrap();

    assert_eq!(customer.0["customerId"], 1);
    assert_eq!(stub.token_hits.count(), 1);
    assert_eq!(stub.lookup_hits.count(), 1);
    assert_eq!(stub.phones.lock().unwrap()[0], TEST_PHONE);
}

#[tokio::test]
async fn should_fetch_fresh_token_for_every_lookup() {
    let stub = spawn_partner(
        StatusCode::OK,
        (StatusCode::OK, partner_customers(vec![partner_customer(1, TEST_PHONE)])),
    )
    .await;
    let client = partner_client(stub.server.base_url());

    client.find_customer_by_phone(TEST_PHONE).await.unwrap();
    client.find_customer_by_phone(TEST_PHONE).await.unwrap();

    assert_eq!(stub.token_hits.count(), 2);
    assert_eq!(stub.lookup_hits.count(), 2);
}

#[tokio::test]
async fn should_return_none_for_empty_result() {
    let stub = spawn_partner(StatusCode::OK, (StatusCode::OK, partner_customers(vec![]))).await;
    let client = partner_client(stub.server.base_url());

    let customer = client.find_customer_by_phone(TEST_PHONE).await.unwrap();
    assert!(customer.is_none());
}

#[tokio::test]
async fn should_return_none_for_non_success_result_code() {
    let stub = spawn_partner(StatusCode::OK, (StatusCode::OK, partner_result("NOT_FOUND"))).await;
    let client = partner_client(stub.server.base_url());

    let customer = client.find_customer_by_phone(TEST_PHONE).await.unwrap();
    assert!(customer.is_none());
}

#[tokio::test]
async fn should_fail_without_lookup_when_token_request_fails() {
    let stub = spawn_partner(
        StatusCode::INTERNAL_SERVER_ERROR,
        (StatusCode::OK, partner_customers(vec![partner_customer(1, TEST_PHONE)])),
    )
    .await;
    let client = partner_client(stub.server.base_url());

    let err = client.find_customer_by_phone(TEST_PHONE).await.unwrap_err();

    assert!(matches!(err, OrdersServiceError::PartnerUnavailable(_)));
    assert_eq!(stub.token_hits.count(), 1);
    assert_eq!(stub.lookup_hits.count(), 0);
}

#[tokio::test]
async fn should_fail_when_lookup_request_fails() {
    let stub = spawn_partner(StatusCode::OK, (StatusCode::SERVICE_UNAVAILABLE, Value::Null)).await;
    let client = partner_client(stub.server.base_url());

    let err = client.find_customer_by_phone(TEST_PHONE).await.unwrap_err();
    assert!(matches!(err, OrdersServiceError::PartnerUnavailable(_)));
    assert_eq!(stub.lookup_hits.count(), 1);
}

#[tokio::test]
async fn should_fail_when_partner_is_unreachable() {
    let client = partner_client(unreachable_base_url().await);

    let err = client.find_customer_by_phone(TEST_PHONE).await.unwrap_err();
    assert_eq!(err.kind(), "PARTNER_UNAVAILABLE");
}

#[tokio::test]
async fn should_resolve_endpoints_under_base_path() {
    let stub = spawn_partner(
        StatusCode::OK,
        (StatusCode::OK, partner_customers(vec![partner_customer(7, TEST_PHONE)])),
    )
    .await;
    // Trailing slash on the base url must not produce a double slash.
    let client = partner_client(format!("{}/", stub.server.base_url()));

    let customer = client.find_customer_by_phone(TEST_PHONE).await.unwrap();
    assert!(customer.is_some());
}
