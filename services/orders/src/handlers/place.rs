use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use storefront_domain::place::Prediction;

use crate::error::OrdersServiceError;
use crate::state::AppState;
use crate::usecase::place::AutocompleteAddressUseCase;

#[derive(Deserialize, Default)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub input: String,
}

// ── GET /api/places/autocomplete ─────────────────────────────────────────────

pub async fn autocomplete_address(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<Vec<Prediction>>, OrdersServiceError> {
    let usecase = AutocompleteAddressUseCase {
        port: state.maps.clone(),
    };
    let predictions = usecase.execute(&query.input).await?;
    Ok(Json(predictions))
}
