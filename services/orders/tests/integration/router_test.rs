use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use uuid::Uuid;

use storefront_orders::router::build_router;
use storefront_orders_schema::external_api_logs::{self, ExternalApiStatus};
use storefront_testing::fixture::{
    TEST_PHONE, partner_customer, partner_customers, places_ok, prediction,
};
use storefront_testing::stub::unreachable_base_url;

use crate::helpers::{order_row, spawn_maps, spawn_partner, test_state};

fn exec_ok() -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }
}

async fn server(db: DatabaseConnection) -> TestServer {
    server_with(db, unreachable_base_url().await, unreachable_base_url().await).await
}

async fn server_with(db: DatabaseConnection, partner_url: String, maps_url: String) -> TestServer {
    TestServer::new(build_router(test_state(db, partner_url, maps_url))).unwrap()
}

fn pending_log_row(order_id: Uuid) -> external_api_logs::Model {
    let now = chrono::Utc::now();
    external_api_logs::Model {
        id: Uuid::now_v7(),
        order_id,
        status: ExternalApiStatus::Pending,
        attempts: 1,
        last_attempted: now,
        error_message: None,
        error_code: None,
        error_stack: None,
        response_data: None,
        created_at: now,
        updated_at: now,
    }
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

#[tokio::test]
async fn should_answer_liveness_check() {
    let server = server(empty_db()).await;

    server.get("/healthz").await.assert_status_ok();
}

#[tokio::test]
async fn should_list_vendor_orders() {
    let vendor_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            order_row(vendor_id, "pending"),
            order_row(vendor_id, "processing"),
        ]])
        .into_connection();
    let server = server(db).await;

    let response = server.get(&format!("/api/vendors/{vendor_id}/orders")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["vendor_id"], vendor_id.to_string());
    assert_eq!(orders[1]["status"], "processing");
}

#[tokio::test]
async fn should_create_order_as_pending() {
    let vendor_id = Uuid::now_v7();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order_row(vendor_id, "pending")]])
        .into_connection();
    let server = server(db).await;

    let response = server
        .post("/api/orders")
        .json(&json!({
            "vendor_id": vendor_id,
            "total_amount": 4200,
            "customer_phone": TEST_PHONE,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_amount"], 4200);
}

#[tokio::test]
async fn should_reject_negative_total_amount() {
    let server = server(empty_db()).await;

    let response = server
        .post("/api/orders")
        .json(&json!({ "vendor_id": Uuid::now_v7(), "total_amount": -1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_AMOUNT");
}

#[tokio::test]
async fn should_update_order_status() {
    let vendor_id = Uuid::now_v7();
    let current = order_row(vendor_id, "pending");
    let mut updated = current.clone();
    updated.status = "completed".to_owned();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![current.clone()], vec![updated]])
        .into_connection();
    let server = server(db).await;

    let response = server
        .put(&format!("/api/orders/{}/status", current.id))
        .json(&json!({ "status": "completed" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "completed");
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<storefront_orders_schema::orders::Model>::new()])
        .into_connection();
    let server = server(db).await;

    let response = server
        .put(&format!("/api/orders/{}/status", Uuid::now_v7()))
        .json(&json!({ "status": "processing" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_unknown_status_value() {
    let server = server(empty_db()).await;

    let response = server
        .put(&format!("/api/orders/{}/status", Uuid::now_v7()))
        .json(&json!({ "status": "shipped" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_store_notification_for_existing_order() {
    let order = order_row(Uuid::now_v7(), "processing");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order.clone()]])
        .append_exec_results([exec_ok()])
        .into_connection();
    let server = server(db).await;

    let response = server
        .post(&format!("/api/orders/{}/notify", order.id))
        .json(&json!({ "message": "Your order is on the way" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["order_id"], order.id.to_string());
    assert_eq!(body["message"], "Your order is on the way");
}

#[tokio::test]
async fn should_return_not_found_when_notifying_unknown_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<storefront_orders_schema::orders::Model>::new()])
        .into_connection();
    let server = server(db).await;

    let response = server
        .post(&format!("/api/orders/{}/notify", Uuid::now_v7()))
        .json(&json!({ "message": "hello" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_skip_provider_for_short_autocomplete_input() {
    let maps = spawn_maps(StatusCode::OK, places_ok(&[prediction("12 Main St", "p1")])).await;
    let server = server_with(
        empty_db(),
        unreachable_base_url().await,
        maps.server.url("/autocomplete"),
    )
    .await;

    let response = server
        .get("/api/places/autocomplete")
        .add_query_param("input", "12")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
    assert_eq!(maps.hits.count(), 0);
}

#[tokio::test]
async fn should_proxy_autocomplete_predictions() {
    let maps = spawn_maps(StatusCode::OK, places_ok(&[prediction("12 Main St", "p1")])).await;
    let server = server_with(
        empty_db(),
        unreachable_base_url().await,
        maps.server.url("/autocomplete"),
    )
    .await;

    let response = server
        .get("/api/places/autocomplete")
        .add_query_param("input", "12 Main")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!([{ "description": "12 Main St", "place_id": "p1" }])
    );
}

#[tokio::test]
async fn should_find_customer_by_phone() {
    let partner = spawn_partner(
        StatusCode::OK,
        (StatusCode::OK, partner_customers(vec![partner_customer(42, TEST_PHONE)])),
    )
    .await;
    let server = server_with(
        empty_db(),
        partner.server.base_url(),
        unreachable_base_url().await,
    )
    .await;

    let response = server.get(&format!("/api/customers/phone/{TEST_PHONE}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["customerId"], 42);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_customer() {
    let partner = spawn_partner(StatusCode::OK, (StatusCode::OK, partner_customers(vec![]))).await;
    let server = server_with(
        empty_db(),
        partner.server.base_url(),
        unreachable_base_url().await,
    )
    .await;

    let response = server.get(&format!("/api/customers/phone/{TEST_PHONE}")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "CUSTOMER_NOT_FOUND");
}

#[tokio::test]
async fn should_record_successful_order_customer_lookup() {
    let partner = spawn_partner(
        StatusCode::OK,
        (StatusCode::OK, partner_customers(vec![partner_customer(42, TEST_PHONE)])),
    )
    .await;
    let order = order_row(Uuid::now_v7(), "pending");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order.clone()]])
        .append_query_results([vec![pending_log_row(order.id)]])
        .append_exec_results([exec_ok()])
        .into_connection();
    let server = server_with(db, partner.server.base_url(), unreachable_base_url().await).await;

    let response = server
        .post(&format!("/api/orders/{}/customer-lookup", order.id))
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["customer"]["customerId"], 42);
    assert_eq!(body["log"]["status"], "SUCCESS");
    assert_eq!(body["log"]["attempts"], 1);
    assert_eq!(body["log"]["error"], Value::Null);
    assert_eq!(partner.phones.lock().unwrap()[0], TEST_PHONE);
}

#[tokio::test]
async fn should_report_bad_gateway_when_partner_is_down() {
    let order = order_row(Uuid::now_v7(), "pending");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![order.clone()]])
        .append_query_results([vec![pending_log_row(order.id)]])
        .append_exec_results([exec_ok()])
        .into_connection();
    let server = server(db).await;

    let response = server
        .post(&format!("/api/orders/{}/customer-lookup", order.id))
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["kind"], "PARTNER_UNAVAILABLE");
}

#[tokio::test]
async fn should_return_not_found_for_missing_external_api_log() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<external_api_logs::Model>::new()])
        .into_connection();
    let server = server(db).await;

    let response = server
        .get(&format!("/api/orders/{}/external-api-log", Uuid::now_v7()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "EXTERNAL_API_LOG_NOT_FOUND");
}
