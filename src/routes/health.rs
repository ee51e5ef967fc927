use crate::routes::AppState;
use advisor::{client::AdvisorClient, storage::effective_settings};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

pub async fn health(headers: HeaderMap) -> axum::response::Response {
    if wants_html(&headers) {
        Html(crate::views::health::health_html()).into_response()
    } else {
        "ok".into_response()
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/html"))
        .unwrap_or(false)
}

#[derive(Serialize)]
pub struct BackendHealth {
    pub url: String,
    pub reachable: bool,
    pub status: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: BackendHealth,
}

/// Reports this server as up and the advisor backend's state alongside.
/// The backend result is informational only.
pub async fn api_health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    let settings = effective_settings(&state.settings_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    let backend = probe_backend(&state.advisor, &settings.backend_url).await;
    Ok(Json(HealthResponse {
        status: "ok",
        backend,
    }))
}

pub async fn probe_backend(advisor: &AdvisorClient, backend_url: &str) -> BackendHealth {
    match advisor.check_health(backend_url).await {
        Ok(health) => BackendHealth {
            url: backend_url.to_string(),
            reachable: true,
            status: Some(health.status),
            error: None,
        },
        Err(err) => BackendHealth {
            url: backend_url.to_string(),
            reachable: false,
            status: None,
            error: Some(err),
        },
    }
}

/// Logs the backend's health once in the background; startup never waits on it.
pub fn spawn_startup_check(advisor: AdvisorClient, backend_url: String) {
    tokio::spawn(async move {
        let health = probe_backend(&advisor, &backend_url).await;
        if health.reachable {
            info!(url = %health.url, status = ?health.status, "advisor backend is healthy");
        } else {
            warn!(url = %health.url, error = ?health.error, "advisor backend health check failed");
        }
    });
}
