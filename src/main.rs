mod forms;
mod routes;
mod services;
mod views;

use advisor::storage::{effective_settings, AppSettings};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = routes::default_state();
    let settings = match effective_settings(&state.settings_path).await {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "falling back to default settings");
            AppSettings::default().with_env_overrides()
        }
    };

    routes::health::spawn_startup_check(state.advisor.clone(), settings.backend_url.clone());

    let app = routes::build_router(state);
    let addr: SocketAddr = settings.bind_addr.parse().expect("invalid bind address");
    info!(backend = %settings.backend_url, "server listening on http://{addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}
