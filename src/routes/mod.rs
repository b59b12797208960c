//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS,
//! and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - Static SPA from `./static` with index fallback
/// - CORS (allow any origin/method/headers) – adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    // Static files with SPA fallback
    let static_service = ServeDir::new("./static")
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new("./static/index.html"));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        // Session / profile
        .route("/api/v1/login", post(http::http_login))
        .route("/api/v1/logout", post(http::http_logout))
        .route("/api/v1/profile", get(http::http_get_profile).put(http::http_put_profile))
        // Skills tracker
        .route("/api/v1/skills", get(http::http_get_skills).post(http::http_add_skill))
        .route(
            "/api/v1/skills/:index",
            put(http::http_update_skill).delete(http::http_remove_skill),
        )
        // Job applications
        .route("/api/v1/jobs", get(http::http_get_jobs).post(http::http_add_job))
        .route("/api/v1/jobs/:id/status", put(http::http_set_job_status))
        // Assessment
        .route("/api/v1/assessment", get(http::http_get_assessment))
        .route("/api/v1/assessment/subjects", get(http::http_get_subjects))
        .route("/api/v1/assessment/choose", post(http::http_choose_subject))
        .route("/api/v1/assessment/start", post(http::http_start_test))
        .route("/api/v1/assessment/answer", post(http::http_select_answer))
        .route("/api/v1/assessment/advance", post(http::http_advance_test))
        .route("/api/v1/assessment/reset", post(http::http_reset_test))
        // Interview / resume tooling
        .route("/api/v1/resume/analyze", post(http::http_analyze_resume))
        .route("/api/v1/interview/start", post(http::http_start_interview))
        // Reports and static content
        .route("/api/v1/report", post(http::http_generate_report))
        .route("/api/v1/careers", get(http::http_get_careers))
        .route("/api/v1/careers/:id", get(http::http_get_career_detail))
        .route("/api/v1/faq", get(http::http_get_faq))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
