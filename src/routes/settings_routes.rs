use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::settings_dto::UpdateSettingsPayload, error::Result, models::settings::Settings, AppState,
};

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Current workspace settings", body = Json<Settings>)
    )
)]
#[axum::debug_handler]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let settings = state.settings_service.get().await?;
    Ok(Json(settings))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsPayload,
    responses(
        (status = 200, description = "Settings updated", body = Json<Settings>)
    )
)]
#[axum::debug_handler]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsPayload>,
) -> Result<impl IntoResponse> {
    let settings = state.settings_service.update(payload).await?;
    Ok(Json(settings))
}
