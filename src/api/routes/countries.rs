//! Country Routes
//!
//! - GET /api/v1/countries - Dropdown options, worldwide first

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::CountryListResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/countries
///
/// Selector values for every country the source reports.
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CountryListResponse>> {
    let countries = state.dashboard.countries().await?;

    Ok(Json(CountryListResponse {
        total: countries.len(),
        countries,
    }))
}
