//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Every widget's data for one selection

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SelectionParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::DashboardView;

/// GET /api/v1/dashboard
///
/// Fetches snapshot, country list and history concurrently.
pub async fn full_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<DashboardView>> {
    let selection = state
        .dashboard
        .resolve(params.country.as_deref(), params.metric.as_deref())?;

    Ok(Json(state.dashboard.load(selection).await?))
}
