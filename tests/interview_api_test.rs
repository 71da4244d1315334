use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use ats_backend::{store::PipelineStore, AppState};

fn app() -> Router {
    let app_state = AppState::new(PipelineStore::seeded().into_shared());
    Router::new()
        .route(
            "/api/interviews",
            get(ats_backend::routes::interview_routes::list_interviews)
                .post(ats_backend::routes::interview_routes::schedule_interview),
        )
        .route(
            "/api/interviews/:id",
            get(ats_backend::routes::interview_routes::get_interview)
                .put(ats_backend::routes::interview_routes::update_interview)
                .delete(ats_backend::routes::interview_routes::cancel_interview),
        )
        .route(
            "/api/interviews/:id/send-reminder",
            post(ats_backend::routes::interview_routes::send_reminder),
        )
        .route(
            "/api/candidates/:id",
            get(ats_backend::routes::candidate_routes::get_candidate)
                .put(ats_backend::routes::candidate_routes::update_candidate),
        )
        .with_state(app_state)
}

async fn request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, json)
}

#[tokio::test]
async fn listing_returns_seeded_interviews_on_the_wire_format() {
    let app = app();

    let (status, body) = request(app, "GET", "/api/interviews", None).await;

    assert_eq!(status, StatusCode::OK);
    let interviews = body.as_array().expect("array body");
    assert_eq!(interviews.len(), 2);
    assert_eq!(interviews[0]["candidateName"], "Sarah Johnson");
    assert_eq!(interviews[0]["type"], "Technical Interview");
    assert_eq!(interviews[0]["reminderSent"], false);
    assert_eq!(interviews[0]["interviewers"], json!(["John Smith", "Jane Doe"]));
    assert_eq!(interviews[1]["status"], "scheduled");
    assert_eq!(interviews[1]["reminderSent"], true);
}

#[tokio::test]
async fn get_returns_the_interview_or_404() {
    let app = app();

    let (status, body) = request(app.clone(), "GET", "/api/interviews/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["candidateName"], "Michael Chen");
    assert_eq!(body["duration"], 30);

    let (status, body) = request(app, "GET", "/api/interviews/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Interview not found" }));
}

#[tokio::test]
async fn scheduling_snapshots_the_candidate_and_promotes_early_stages() {
    let app = app();

    // Candidate 3 is at `applied`; caller-sent name and position lose to
    // the stored record.
    let payload = json!({
        "candidateId": "3",
        "candidateName": "Wrong Name",
        "position": "Wrong Position",
        "date": "2026-02-10",
        "time": "09:00",
        "type": "Portfolio Review"
    });
    let (status, body) = request(app.clone(), "POST", "/api/interviews", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["candidateName"], "Emily Davis");
    assert_eq!(body["position"], "UX Designer");
    assert_eq!(body["type"], "Portfolio Review");
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["reminderSent"], false);
    assert!(!body["id"].as_str().unwrap().is_empty());

    let (_, candidate) = request(app.clone(), "GET", "/api/candidates/3", None).await;
    assert_eq!(candidate["stage"], "interview");

    // phone_screen promotes the same way.
    let payload = json!({ "candidateId": "2", "date": "2026-02-11" });
    let (status, _) = request(app.clone(), "POST", "/api/interviews", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, candidate) = request(app, "GET", "/api/candidates/2", None).await;
    assert_eq!(candidate["stage"], "interview");
}

#[tokio::test]
async fn scheduling_never_demotes_late_stage_candidates() {
    let app = app();

    let payload = json!({ "candidateId": "4", "date": "2026-02-12" });
    let (status, body) = request(app.clone(), "POST", "/api/interviews", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["candidateName"], "James Wilson");

    let (_, candidate) = request(app, "GET", "/api/candidates/4", None).await;
    assert_eq!(candidate["stage"], "offer");
}

#[tokio::test]
async fn scheduling_for_an_unknown_candidate_keeps_caller_fields() {
    let app = app();

    let payload = json!({
        "candidateId": "ghost",
        "candidateName": "Zed External",
        "position": "QA Engineer",
        "date": "2026-02-15"
    });
    let (status, body) = request(app, "POST", "/api/interviews", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["candidateId"], "ghost");
    assert_eq!(body["candidateName"], "Zed External");
    assert_eq!(body["position"], "QA Engineer");
}

#[tokio::test]
async fn snapshots_do_not_follow_later_candidate_edits() {
    let app = app();

    let payload = json!({ "candidateId": "3" });
    let (_, interview) = request(app.clone(), "POST", "/api/interviews", Some(payload)).await;
    let id = interview["id"].as_str().unwrap().to_string();

    let rename = json!({ "name": "Emily Davis-Jones" });
    let (status, _) = request(app.clone(), "PUT", "/api/candidates/3", Some(rename)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, interview) = request(app, "GET", &format!("/api/interviews/{}", id), None).await;
    assert_eq!(interview["candidateName"], "Emily Davis");
}

#[tokio::test]
async fn update_merges_and_cancel_removes() {
    let app = app();

    let patch = json!({ "notes": "Moved to Friday", "status": "completed" });
    let (status, body) = request(app.clone(), "PUT", "/api/interviews/1", Some(patch)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], "Moved to Friday");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["date"], "2026-01-24");
    assert_eq!(body["candidateName"], "Sarah Johnson");

    let (status, body) = request(app.clone(), "DELETE", "/api/interviews/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, JsonValue::Null);

    let (status, _) = request(app.clone(), "GET", "/api/interviews/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = request(app.clone(), "GET", "/api/interviews", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = request(app.clone(), "DELETE", "/api/interviews/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Interview not found" }));

    let (status, body) = request(app, "PUT", "/api/interviews/missing", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Interview not found" }));
}

#[tokio::test]
async fn reminders_set_the_flag_and_stay_set() {
    let app = app();

    let (status, body) = request(app.clone(), "POST", "/api/interviews/1/send-reminder", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Reminder sent to Sarah Johnson" })
    );

    let (_, interview) = request(app.clone(), "GET", "/api/interviews/1", None).await;
    assert_eq!(interview["reminderSent"], true);

    // Sending again is a no-op with the same response.
    let (status, body) = request(app.clone(), "POST", "/api/interviews/1/send-reminder", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, interview) = request(app.clone(), "GET", "/api/interviews/1", None).await;
    assert_eq!(interview["reminderSent"], true);

    let (status, body) = request(app, "POST", "/api/interviews/missing/send-reminder", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Interview not found" }));
}
