use storefront_domain::order::Order;

use crate::api::ShopClient;

/// Shown to the user once the service has stored a notification.
pub const NOTIFY_ACKNOWLEDGEMENT: &str = "Notification sent successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Acknowledged,
    Failed,
}

impl NotifyOutcome {
    /// Text to show the user. Failures are only logged, so they have none.
    pub fn acknowledgement(self) -> Option<&'static str> {
        match self {
            Self::Acknowledged => Some(NOTIFY_ACKNOWLEDGEMENT),
            Self::Failed => None,
        }
    }
}

/// One order, read-only, plus the notification message being drafted for it.
pub struct OrderDetailView {
    api: ShopClient,
    order: Order,
    message: String,
}

impl OrderDetailView {
    pub fn new(api: ShopClient, order: Order) -> Self {
        Self {
            api,
            order,
            message: String::new(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Send the drafted message. The message is sent as is, even when empty.
    pub async fn submit_notification(&self) -> NotifyOutcome {
        match self.api.notify_order(self.order.id, &self.message).await {
            Ok(notification) => {
                tracing::info!(
                    order_id = %self.order.id,
                    notification_id = %notification.id,
                    "notification sent"
                );
                NotifyOutcome::Acknowledged
            }
            Err(err) => {
                tracing::error!(
                    order_id = %self.order.id,
                    status = ?err.status(),
                    error = %err,
                    "failed to send notification"
                );
                NotifyOutcome::Failed
            }
        }
    }
}
