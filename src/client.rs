use crate::models::{AskRequest, AskResponse, HealthStatus};
use std::sync::Arc;
use tracing::{info, warn};

const ASK_PATH: &str = "/api/ask";
const HEALTH_PATH: &str = "/api/health";
const DEFAULT_FAILURE: &str = "Failed to get answer";

/// Status code and body of a completed backend call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait::async_trait]
pub trait AdvisorTransport: Send + Sync {
    async fn post_question(&self, url: &str, request: &AskRequest) -> Result<RawResponse, String>;
    async fn get_health(&self, url: &str) -> Result<RawResponse, String>;
}

#[derive(Clone)]
pub struct AdvisorClient {
    transport: Arc<dyn AdvisorTransport>,
}

impl AdvisorClient {
    pub fn new(transport: Arc<dyn AdvisorTransport>) -> Self {
        Self { transport }
    }

    /// Sends one question and returns the raw answer text.
    pub async fn ask(&self, base_url: &str, request: &AskRequest) -> Result<String, String> {
        if request.question.trim().is_empty() {
            return Err("Please enter a question".to_string());
        }

        let url = endpoint(base_url, ASK_PATH);
        info!(%url, question_len = request.question.len(), "forwarding question to advisor");
        let response = self
            .transport
            .post_question(&url, request)
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "advisor request failed");
                format!("Failed to connect to server at {base_url}: {err}")
            })?;

        interpret_ask_response(response.status, &response.body)
    }

    pub async fn check_health(&self, base_url: &str) -> Result<HealthStatus, String> {
        let url = endpoint(base_url, HEALTH_PATH);
        let response = self.transport.get_health(&url).await?;
        if !(200..300).contains(&response.status) {
            return Err(format!("health check failed: status {}", response.status));
        }
        serde_json::from_str(&response.body)
            .map_err(|err| format!("failed to parse health response: {err}"))
    }
}

/// Turns a backend reply into the answer text or a message fit for the user.
pub fn interpret_ask_response(status: u16, body: &str) -> Result<String, String> {
    let parsed = serde_json::from_str::<AskResponse>(body).ok();

    if !(200..300).contains(&status) {
        return Err(parsed
            .as_ref()
            .and_then(failure_message)
            .unwrap_or_else(|| format!("HTTP error! status: {status}")));
    }

    let parsed = parsed.ok_or_else(|| "failed to parse advisor response".to_string())?;
    if !parsed.success {
        return Err(failure_message(&parsed).unwrap_or_else(|| DEFAULT_FAILURE.to_string()));
    }
    parsed
        .answer
        .ok_or_else(|| DEFAULT_FAILURE.to_string())
}

fn failure_message(response: &AskResponse) -> Option<String> {
    [&response.message, &response.error_details]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .cloned()
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AdvisorTransport for ReqwestTransport {
    async fn post_question(&self, url: &str, request: &AskRequest) -> Result<RawResponse, String> {
        let response = self
            .client
            .post(url)
            .form(request)
            .send()
            .await
            .map_err(|err| format!("request failed: {err}"))?;
        read_response(response).await
    }

    async fn get_health(&self, url: &str) -> Result<RawResponse, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| format!("request failed: {err}"))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<RawResponse, String> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| format!("failed to read response: {err}"))?;
    Ok(RawResponse { status, body })
}
