//! Chart Routes
//!
//! - GET /api/v1/chart - Daily deltas for the selected scope and metric

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::SelectionParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::ChartData;

/// GET /api/v1/chart
///
/// An empty `points` list means the source has no history for the scope.
pub async fn daily_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<ChartData>> {
    let selection = state
        .dashboard
        .resolve(params.country.as_deref(), params.metric.as_deref())?;

    let chart = state.dashboard.chart(&selection).await?;

    tracing::debug!(
        scope = %selection.scope,
        metric = %selection.metric,
        points = chart.points.len(),
        "Built chart"
    );

    Ok(Json(chart))
}
