use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::ExternalApiLog;
use crate::error::OrdersServiceError;
use crate::state::AppState;
use crate::usecase::customer::{
    FindCustomerUseCase, GetExternalApiLogUseCase, LookupOrderCustomerInput,
    LookupOrderCustomerUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ExternalApiLogResponse {
    pub id: String,
    pub order_id: String,
    pub status: &'static str,
    pub attempts: i32,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub last_attempted: chrono::DateTime<chrono::Utc>,
    pub error: Option<ExternalCallErrorResponse>,
    pub response_data: Option<serde_json::Value>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "storefront_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct ExternalCallErrorResponse {
    pub message: String,
    pub code: Option<String>,
    pub stack: Option<String>,
}

impl From<ExternalApiLog> for ExternalApiLogResponse {
    fn from(log: ExternalApiLog) -> Self {
        Self {
            id: log.id.to_string(),
            order_id: log.order_id.to_string(),
            status: log.status.as_str(),
            attempts: log.attempts,
            last_attempted: log.last_attempted,
            error: log.error.map(|e| ExternalCallErrorResponse {
                message: e.message,
                code: e.code,
                stack: e.stack,
            }),
            response_data: log.response_data,
            created_at: log.created_at,
            updated_at: log.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct CustomerLookupResponse {
    pub customer: Option<serde_json::Value>,
    pub log: ExternalApiLogResponse,
}

// ── GET /api/customers/phone/{phone} ─────────────────────────────────────────

pub async fn get_customer_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> Result<Json<serde_json::Value>, OrdersServiceError> {
    let usecase = FindCustomerUseCase {
        lookup: state.partner.clone(),
    };
    let customer = usecase.execute(&phone).await?;
    Ok(Json(customer.0))
}

// ── POST /api/orders/{order_id}/customer-lookup ──────────────────────────────

#[derive(Deserialize, Default)]
pub struct CustomerLookupRequest {
    #[serde(default)]
    pub phone: Option<String>,
}

pub async fn lookup_order_customer(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(body): Json<CustomerLookupRequest>,
) -> Result<Json<CustomerLookupResponse>, OrdersServiceError> {
    let usecase = LookupOrderCustomerUseCase {
        orders: state.order_repo(),
        logs: state.external_api_log_repo(),
        lookup: state.partner.clone(),
    };
    let output = usecase
        .execute(order_id, LookupOrderCustomerInput { phone: body.phone })
        .await?;
    Ok(Json(CustomerLookupResponse {
        customer: output.customer.map(|c| c.0),
        log: output.log.into(),
    }))
}

// ── GET /api/orders/{order_id}/external-api-log ──────────────────────────────

pub async fn get_external_api_log(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<ExternalApiLogResponse>, OrdersServiceError> {
    let usecase = GetExternalApiLogUseCase {
        logs: state.external_api_log_repo(),
    };
    let log = usecase.execute(order_id).await?;
    Ok(Json(log.into()))
}
