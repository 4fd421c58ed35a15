use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;

use storefront_core::health::healthz;
use storefront_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    customer::{get_customer_by_phone, get_external_api_log, lookup_order_customer},
    health::readyz,
    notification::{get_order_notifications, notify_order},
    order::{create_order, get_order, get_vendor_orders, update_order_status},
    place::autocomplete_address,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Orders
        .route("/api/orders", post(create_order))
        .route("/api/orders/{order_id}", get(get_order))
        .route("/api/orders/{order_id}/status", put(update_order_status))
        .route("/api/vendors/{vendor_id}/orders", get(get_vendor_orders))
        // Notifications
        .route("/api/orders/{order_id}/notify", post(notify_order))
        .route(
            "/api/orders/{order_id}/notifications",
            get(get_order_notifications),
        )
        // Partner customers
        .route("/api/customers/phone/{phone}", get(get_customer_by_phone))
        .route(
            "/api/orders/{order_id}/customer-lookup",
            post(lookup_order_customer),
        )
        .route(
            "/api/orders/{order_id}/external-api-log",
            get(get_external_api_log),
        )
        // Places
        .route("/api/places/autocomplete", get(autocomplete_address))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
