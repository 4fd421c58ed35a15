use axum::{extract::State, http::StatusCode};

use storefront_core::error::AppError;
use storefront_core::health::database_ready;

use crate::state::AppState;

/// Handler for `GET /readyz`: ready once the database answers.
pub async fn readyz(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    database_ready(&state.db).await
}
