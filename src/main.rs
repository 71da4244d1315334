use axum::{
    routing::{get, patch, post},
    Router,
};
use ats_backend::{
    config::{get_config, init_config},
    routes,
    store::PipelineStore,
    AppState,
};
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    // All records live in memory and reset to the demo dataset on restart.
    let store = PipelineStore::seeded().into_shared();
    let app_state = AppState::new(store);

    let base_routes = Router::new().route("/health", get(routes::system::health));

    let candidate_api = Router::new()
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .put(routes::candidate_routes::update_candidate)
                .delete(routes::candidate_routes::delete_candidate),
        )
        .route(
            "/api/candidates/:id/stage",
            patch(routes::candidate_routes::update_candidate_stage),
        );

    let interview_api = Router::new()
        .route(
            "/api/interviews",
            get(routes::interview_routes::list_interviews)
                .post(routes::interview_routes::schedule_interview),
        )
        .route(
            "/api/interviews/:id",
            get(routes::interview_routes::get_interview)
                .put(routes::interview_routes::update_interview)
                .delete(routes::interview_routes::cancel_interview),
        )
        .route(
            "/api/interviews/:id/send-reminder",
            post(routes::interview_routes::send_reminder),
        );

    let workspace_api = Router::new()
        .route(
            "/api/settings",
            get(routes::settings_routes::get_settings)
                .put(routes::settings_routes::update_settings),
        )
        .route("/api/stats", get(routes::stats_routes::get_stats))
        .route("/api/calendar/auth", get(routes::system::calendar_auth));

    info!("Serving frontend from: {}", config.static_dir);
    let index_file = Path::new(&config.static_dir).join("index.html");
    let spa = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_file));

    let app = base_routes
        .merge(candidate_api)
        .merge(interview_api)
        .merge(workspace_api)
        .fallback_service(spa)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
