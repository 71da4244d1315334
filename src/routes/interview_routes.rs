use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::interview_dto::{ReminderResponse, ScheduleInterviewPayload, UpdateInterviewPayload},
    error::Result,
    models::interview::Interview,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/interviews",
    responses(
        (status = 200, description = "All interviews", body = Json<Vec<Interview>>)
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list().await?;
    Ok(Json(interviews))
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(
        ("id" = String, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview found", body = Json<Interview>),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(&id).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    post,
    path = "/api/interviews",
    request_body = ScheduleInterviewPayload,
    responses(
        (status = 201, description = "Interview scheduled", body = Json<Interview>)
    )
)]
#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.schedule(payload).await?;
    Ok((StatusCode::CREATED, Json(interview)))
}

#[utoipa::path(
    put,
    path = "/api/interviews/{id}",
    params(
        ("id" = String, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewPayload,
    responses(
        (status = 200, description = "Interview updated", body = Json<Interview>),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateInterviewPayload>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.update(&id, payload).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    delete,
    path = "/api/interviews/{id}",
    params(
        ("id" = String, Path, description = "Interview ID")
    ),
    responses(
        (status = 204, description = "Interview cancelled"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn cancel_interview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.interview_service.cancel(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/interviews/{id}/send-reminder",
    params(
        ("id" = String, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Reminder flagged as sent", body = Json<ReminderResponse>),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn send_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.send_reminder(&id).await?;
    let recipient = interview.candidate_name.unwrap_or_default();
    Ok(Json(ReminderResponse {
        success: true,
        message: format!("Reminder sent to {}", recipient),
    }))
}
