use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use storefront_core::error::error_response;

/// Orders service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    OrderNotFound,
    #[error("customer not found")]
    CustomerNotFound,
    #[error("external api log not found")]
    ExternalApiLogNotFound,
    #[error("missing phone")]
    MissingPhone,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("partner api unavailable")]
    PartnerUnavailable(#[source] anyhow::Error),
    #[error("autocomplete provider unavailable")]
    AutocompleteUnavailable(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl OrdersServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::ExternalApiLogNotFound => "EXTERNAL_API_LOG_NOT_FOUND",
            Self::MissingPhone => "MISSING_PHONE",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::PartnerUnavailable(_) => "PARTNER_UNAVAILABLE",
            Self::AutocompleteUnavailable(_) => "AUTOCOMPLETE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for OrdersServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::OrderNotFound | Self::CustomerNotFound | Self::ExternalApiLogNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MissingPhone | Self::InvalidAmount => StatusCode::BAD_REQUEST,
            Self::PartnerUnavailable(_) | Self::AutocompleteUnavailable(_) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
            Self::PartnerUnavailable(e) | Self::AutocompleteUnavailable(e) => {
                tracing::warn!(error = %e, kind = self.kind(), "upstream call failed")
            }
            _ => {}
        }
        error_response(status, self.kind(), self.to_string())
    }
}
