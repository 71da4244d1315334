use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::stats_dto::PipelineStats, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Pipeline counters", body = Json<PipelineStats>)
    )
)]
#[axum::debug_handler]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.stats_service.compute().await?;
    Ok(Json(stats))
}
