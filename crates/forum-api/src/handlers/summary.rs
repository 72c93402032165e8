//! Forum index summary handler

use axum::{extract::State, Json};
use forum_service::{ForumSummaryResponse, StatsService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Forum-wide counts and the newest threads
///
/// GET /summary
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Json<ForumSummaryResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.summary().await?;
    Ok(Json(response))
}
