//! Canned payloads for third-party APIs and sample domain records.

use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

use storefront_domain::id::{OrderId, VendorId};
use storefront_domain::order::{Order, OrderStatus};
use storefront_domain::place::Prediction;

pub const TEST_PARTNER_TOKEN: &str = "test-partner-token";
pub const TEST_PHONE: &str = "5551234567";

/// Token endpoint body as returned by the partner API.
pub fn partner_token(token: &str) -> Value {
    json!({ "token": token })
}

/// Successful customer-by-phone body carrying `customers`.
pub fn partner_customers(customers: Vec<Value>) -> Value {
    json!({ "resultCode": "SUCCESS", "data": customers })
}

/// Customer-by-phone body with a non-success result code.
pub fn partner_result(code: &str) -> Value {
    json!({ "resultCode": code, "data": [] })
}

pub fn partner_customer(id: u64, phone: &str) -> Value {
    json!({
        "customerId": id,
        "firstName": "Test",
        "lastName": "Customer",
        "phone": phone,
    })
}

/// Map-provider autocomplete body with status `OK`.
pub fn places_ok(predictions: &[Prediction]) -> Value {
    let predictions: Vec<Value> = predictions
        .iter()
        .map(|p| json!({ "description": p.description, "place_id": p.place_id }))
        .collect();
    json!({ "status": "OK", "predictions": predictions })
}

pub fn places_status(status: &str) -> Value {
    json!({ "status": status, "predictions": [] })
}

pub fn prediction(description: &str, place_id: &str) -> Prediction {
    Prediction {
        description: description.to_owned(),
        place_id: place_id.to_owned(),
    }
}

pub fn sample_order(vendor_id: Uuid, status: OrderStatus) -> Order {
    let now = Utc::now();
    Order {
        id: OrderId(Uuid::now_v7()),
        vendor_id: VendorId(vendor_id),
        status,
        total_amount: 2599,
        customer_phone: Some(TEST_PHONE.to_owned()),
        delivery_address: Some("12 Main St".to_owned()),
        place_id: None,
        created_at: now,
        updated_at: now,
    }
}
