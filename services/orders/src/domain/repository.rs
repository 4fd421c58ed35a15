#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use storefront_domain::order::OrderStatus;
use storefront_domain::place::Prediction;

use crate::domain::types::{ExternalApiLog, Order, OrderNotification, PartnerCustomer};
use crate::error::OrdersServiceError;

/// Repository for orders.
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrdersServiceError>;

    /// All orders of a vendor, newest first.
    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Order>, OrdersServiceError>;

    async fn create(&self, order: &Order) -> Result<(), OrdersServiceError>;

    /// Set the status of an order. Returns the updated order, or `None` if it does not exist.
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrdersServiceError>;
}

/// Repository for order notifications.
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &OrderNotification) -> Result<(), OrdersServiceError>;

    /// Notifications of one order, newest first.
    async fn list_by_order(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderNotification>, OrdersServiceError>;
}

/// Repository for the per-order partner API attempt log.
pub trait ExternalApiLogRepository: Send + Sync {
    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<ExternalApiLog>, OrdersServiceError>;

    /// Record a new in-flight attempt atomically: create the order's log with one
    /// attempt, or increment the existing log's attempts and mark it pending.
    async fn begin_attempt(
        &self,
        order_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ExternalApiLog, OrdersServiceError>;

    /// Write the outcome of a settled attempt: status, error, response data and
    /// `updated_at`. The attempt counter is left untouched.
    async fn settle(&self, log: &ExternalApiLog) -> Result<(), OrdersServiceError>;
}

/// Port for the dispensary partner API.
pub trait CustomerLookupPort: Send + Sync {
    /// First customer registered under `phone`, or `None` when the partner has no match.
    /// Transport and status failures surface as [`OrdersServiceError::PartnerUnavailable`].
    async fn find_customer_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<PartnerCustomer>, OrdersServiceError>;
}

/// Port for the map-provider address autocomplete API.
pub trait AutocompletePort: Send + Sync {
    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, OrdersServiceError>;
}
