pub mod ask;
pub mod health;
pub mod settings;

use advisor::{
    client::{AdvisorClient, ReqwestTransport},
    storage::settings_path,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub settings_path: PathBuf,
    pub advisor: AdvisorClient,
}

pub fn build_router(state: AppState) -> Router {
    let web_dir = web_dir();
    Router::new()
        .route("/", get(ask::ask_page))
        .route("/ask", post(ask::submit_question))
        .route("/api/format", post(ask::format_answer_api))
        .route("/api/health", get(health::api_health))
        .route("/settings", get(settings::settings_page).post(settings::settings_save))
        .route("/health", get(health::health))
        .nest_service("/web", ServeDir::new(web_dir))
        .with_state(state)
}

pub fn default_state() -> AppState {
    AppState {
        settings_path: settings_path(),
        advisor: AdvisorClient::new(Arc::new(ReqwestTransport::new())),
    }
}

fn web_dir() -> PathBuf {
    std::env::var("ADVISOR_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web"))
}
