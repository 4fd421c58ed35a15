use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// Handler for `GET /healthz`: liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness check: the service is ready once its database answers a ping.
pub async fn database_ready(db: &DatabaseConnection) -> Result<StatusCode, AppError> {
    match db.ping().await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            Err(AppError::Unavailable)
        }
    }
}
