//! Map Routes
//!
//! - GET /api/v1/map - Camera and per-country markers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SelectionParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::MapData;

/// GET /api/v1/map
pub async fn map_markers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<MapData>> {
    let selection = state
        .dashboard
        .resolve(params.country.as_deref(), params.metric.as_deref())?;

    Ok(Json(state.dashboard.map(&selection).await?))
}
