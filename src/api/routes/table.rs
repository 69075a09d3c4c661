//! Table Routes
//!
//! - GET /api/v1/table - Countries ranked by total, highest first

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{TableParams, TableResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/table
///
/// Ranks by the configured default metric unless `metric` names another,
/// the same ordering the full dashboard uses.
pub async fn ranked_table(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TableParams>,
) -> ApiResult<Json<TableResponse>> {
    let metric = state.dashboard.resolve(None, params.metric.as_deref())?.metric;

    if params.limit == Some(0) {
        return Err(ApiError::Validation("limit must be at least 1".to_string()));
    }

    let mut rows = state.dashboard.table(metric).await?;
    let total = rows.len();
    if let Some(limit) = params.limit {
        rows.truncate(limit);
    }

    Ok(Json(TableResponse {
        metric,
        rows,
        total,
    }))
}
