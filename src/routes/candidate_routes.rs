use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::candidate_dto::{CreateCandidatePayload, SetStagePayload, UpdateCandidatePayload},
    error::Result,
    models::candidate::Candidate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    responses(
        (status = 200, description = "All candidates in the pipeline", body = Json<Vec<Candidate>>)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list().await?;
    Ok(Json(candidates))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate found", body = Json<Candidate>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.get(&id).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate created at the applied stage", body = Json<Candidate>)
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    put,
    path = "/api/candidates/{id}",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    request_body = UpdateCandidatePayload,
    responses(
        (status = 200, description = "Candidate updated", body = Json<Candidate>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.update(&id, payload).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    patch,
    path = "/api/candidates/{id}/stage",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    request_body = SetStagePayload,
    responses(
        (status = 200, description = "Stage updated", body = Json<Candidate>),
        (status = 404, description = "Candidate not found"),
        (status = 422, description = "Unknown stage name")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate_stage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetStagePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.set_stage(&id, payload).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    params(
        ("id" = String, Path, description = "Candidate ID")
    ),
    responses(
        (status = 204, description = "Candidate deleted"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
