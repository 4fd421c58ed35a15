use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::OrderNotification;
use crate::error::OrdersServiceError;
use crate::state::AppState;
use crate::usecase::notification::{ListOrderNotificationsUseCase, NotifyOrderUseCase};

#[derive(Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub order_id: String,
    pub message: String,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<OrderNotification> for NotificationResponse {
    fn from(n: OrderNotification) -> Self {
        Self {
            id: n.id.to_string(),
            order_id: n.order_id.to_string(),
            message: n.message,
            created_at: n.created_at,
        }
    }
}

// ── POST /api/orders/{order_id}/notify ───────────────────────────────────────

#[derive(Deserialize)]
pub struct NotifyRequest {
    #[serde(default)]
    pub message: String,
}

pub async fn notify_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(body): Json<NotifyRequest>,
) -> Result<Json<NotificationResponse>, OrdersServiceError> {
    let usecase = NotifyOrderUseCase {
        orders: state.order_repo(),
        notifications: state.notification_repo(),
    };
    let notification = usecase.execute(order_id, body.message).await?;
    Ok(Json(notification.into()))
}

// ── GET /api/orders/{order_id}/notifications ─────────────────────────────────

pub async fn get_order_notifications(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Vec<NotificationResponse>>, OrdersServiceError> {
    let usecase = ListOrderNotificationsUseCase {
        orders: state.order_repo(),
        notifications: state.notification_repo(),
    };
    let notifications = usecase.execute(order_id).await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}
