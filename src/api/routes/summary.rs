//! Summary Routes
//!
//! - GET /api/v1/summary - Today/total tiles for the selected scope

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{SelectionParams, SummaryResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/summary
pub async fn summary_tiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<SummaryResponse>> {
    let selection = state
        .dashboard
        .resolve(params.country.as_deref(), params.metric.as_deref())?;

    let tiles = state.dashboard.summary(&selection).await?;

    Ok(Json(SummaryResponse { selection, tiles }))
}
