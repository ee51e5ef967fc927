use crate::forms::{AskForm, FormatRequest, FormatResponse};
use crate::routes::AppState;
use crate::services::{build_ask_request, current_datetime};
use crate::views::ask::{render_answer_result, render_ask_page, render_error_result};
use advisor::{formatter::format_answer, storage::effective_settings};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Html,
    Form, Json,
};
use tracing::{info, warn};

pub async fn ask_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let settings = effective_settings(&state.settings_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    Ok(Html(render_ask_page(&settings.backend_url, None)))
}

/// Handles one submission. Failures are rendered into the result area with
/// a 200 so htmx swaps them in like an answer.
pub async fn submit_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let settings = effective_settings(&state.settings_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    let question = form.question.trim().to_string();

    let outcome = match build_ask_request(form) {
        Ok(request) => state.advisor.ask(&settings.backend_url, &request).await,
        Err(message) => Err(message),
    };

    let fragment = match outcome {
        Ok(answer) => {
            info!(answer_len = answer.len(), "answer received");
            render_answer_result(&question, &format_answer(&answer), &current_datetime())
        }
        Err(message) => {
            warn!(error = %message, "question not answered");
            render_error_result(&question, &message)
        }
    };

    if is_htmx(&headers) {
        Ok(Html(fragment))
    } else {
        Ok(Html(render_ask_page(&settings.backend_url, Some(&fragment))))
    }
}

pub async fn format_answer_api(Json(request): Json<FormatRequest>) -> Json<FormatResponse> {
    Json(FormatResponse {
        html: format_answer(&request.answer),
    })
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == "true")
        .unwrap_or(false)
}
