use crate::forms::SettingsForm;
use crate::routes::AppState;
use crate::views::settings::{render_settings_page, Notice};
use advisor::storage::{load_settings, save_settings, AppSettings};
use axum::{extract::State, http::StatusCode, response::Html, Form};
use tracing::info;

pub async fn settings_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let settings = load_settings(&state.settings_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    Ok(Html(render_settings_page(&settings, None)))
}

pub async fn settings_save(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let settings = AppSettings {
        backend_url: form.backend_url.trim().to_string(),
        bind_addr: form.bind_addr.trim().to_string(),
    };

    if let Err(message) = settings.validate() {
        return Ok(Html(render_settings_page(&settings, Some(Notice::Invalid(&message)))));
    }

    save_settings(&state.settings_path, &settings)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    info!(path = %state.settings_path.display(), "settings saved");

    Ok(Html(render_settings_page(&settings, Some(Notice::Saved("Settings saved.")))))
}
