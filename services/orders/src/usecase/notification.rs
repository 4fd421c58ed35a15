use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{NotificationRepository, OrderRepository};
use crate::domain::types::OrderNotification;
use crate::error::OrdersServiceError;

// ── NotifyOrder ──────────────────────────────────────────────────────────────

/// Store a free-text message for the customer of an order.
///
/// The message is stored as given; an empty message is accepted.
pub struct NotifyOrderUseCase<O: OrderRepository, N: NotificationRepository> {
    pub orders: O,
    pub notifications: N,
}

impl<O: OrderRepository, N: NotificationRepository> NotifyOrderUseCase<O, N> {
    pub async fn execute(
        &self,
        order_id: Uuid,
        message: String,
    ) -> Result<OrderNotification, OrdersServiceError> {
        if self.orders.find_by_id(order_id).await?.is_none() {
            return Err(OrdersServiceError::OrderNotFound);
        }
        let notification = OrderNotification {
            id: Uuid::now_v7(),
            order_id,
            message,
            created_at: Utc::now(),
        };
        self.notifications.create(&notification).await?;
        tracing::info!(%order_id, notification_id = %notification.id, "order notification stored");
        Ok(notification)
    }
}

// ── ListOrderNotifications ───────────────────────────────────────────────────

pub struct ListOrderNotificationsUseCase<O: OrderRepository, N: NotificationRepository> {
    pub orders: O,
    pub notifications: N,
}

impl<O: OrderRepository, N: NotificationRepository> ListOrderNotificationsUseCase<O, N> {
    pub async fn execute(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderNotification>, OrdersServiceError> {
        if self.orders.find_by_id(order_id).await?.is_none() {
            return Err(OrdersServiceError::OrderNotFound);
        }
        self.notifications.list_by_order(order_id).await
    }
}
