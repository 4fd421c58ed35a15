use chrono::{DateTime, Utc};
use uuid::Uuid;

use storefront_domain::order::OrderStatus;

/// Order owned by the orders service.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub status: OrderStatus,
    /// Total in minor currency units.
    pub total_amount: i64,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub place_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Message sent to the customer of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderNotification {
    pub id: Uuid,
    pub order_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Customer record returned by the partner API. The shape is owned by the partner,
/// so it is carried as opaque JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerCustomer(pub serde_json::Value);

/// Status of the latest partner attempt recorded in an [`ExternalApiLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalCallStatus {
    Success,
    Failed,
    Pending,
}

impl ExternalCallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
        }
    }
}

/// Failure details of a partner attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalCallError {
    pub message: String,
    pub code: Option<String>,
    /// Full error chain, outermost context first.
    pub stack: Option<String>,
}

/// Persisted log of partner API attempts for one order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalApiLog {
    pub id: Uuid,
    pub order_id: Uuid,
    pub status: ExternalCallStatus,
    pub attempts: i32,
    pub last_attempted: DateTime<Utc>,
    pub error: Option<ExternalCallError>,
    pub response_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExternalApiLog {
    /// Log for the first attempt made on behalf of `order_id`.
    pub fn first_attempt(order_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            order_id,
            status: ExternalCallStatus::Pending,
            attempts: 1,
            last_attempted: now,
            error: None,
            response_data: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn succeed(&mut self, response_data: Option<serde_json::Value>, now: DateTime<Utc>) {
        self.status = ExternalCallStatus::Success;
        self.error = None;
        self.response_data = response_data;
        self.updated_at = now;
    }

    pub fn fail(&mut self, error: ExternalCallError, now: DateTime<Utc>) {
        self.status = ExternalCallStatus::Failed;
        self.error = Some(error);
        self.updated_at = now;
    }
}
