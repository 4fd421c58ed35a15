use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_domain::order::OrderStatus;

use crate::domain::types::Order;
use crate::error::OrdersServiceError;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListVendorOrdersUseCase,
    UpdateOrderStatusUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub vendor_id: String,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub place_id: Option<String>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            vendor_id: order.vendor_id.to_string(),
            status: order.status,
            total_amount: order.total_amount,
            customer_phone: order.customer_phone,
            delivery_address: order.delivery_address,
            place_id: order.place_id,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

// ── POST /api/orders ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub vendor_id: Uuid,
    pub total_amount: i64,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub place_id: Option<String>,
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), OrdersServiceError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase
        .execute(CreateOrderInput {
            vendor_id: body.vendor_id,
            total_amount: body.total_amount,
            customer_phone: body.customer_phone,
            delivery_address: body.delivery_address,
            place_id: body.place_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── GET /api/orders/{order_id} ───────────────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderResponse>, OrdersServiceError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(order_id).await?;
    Ok(Json(order.into()))
}

// ── GET /api/vendors/{vendor_id}/orders ──────────────────────────────────────

pub async fn get_vendor_orders(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<Json<Vec<OrderResponse>>, OrdersServiceError> {
    let usecase = ListVendorOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(vendor_id).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── PUT /api/orders/{order_id}/status ────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<OrderResponse>, OrdersServiceError> {
    let usecase = UpdateOrderStatusUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(order_id, body.status).await?;
    Ok(Json(order.into()))
}
