use advisor::client::{AdvisorClient, AdvisorTransport, RawResponse};
use advisor::formatter::format_answer;
use advisor::models::AskRequest;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockTransport {
    reply: Option<RawResponse>,
    calls: Mutex<Vec<(String, AskRequest)>>,
}

impl MockTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Some(RawResponse {
                status,
                body: body.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, AskRequest)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait::async_trait]
impl AdvisorTransport for MockTransport {
    async fn post_question(&self, url: &str, request: &AskRequest) -> Result<RawResponse, String> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((url.to_string(), request.clone()));
        self.reply.clone().ok_or_else(|| "connection refused".to_string())
    }

    async fn get_health(&self, url: &str) -> Result<RawResponse, String> {
        match url {
            "http://advisor:8000/api/health" => self.reply.clone().ok_or_else(|| "connection refused".to_string()),
            _ => Err("unknown url".to_string()),
        }
    }
}

fn question(text: &str) -> AskRequest {
    AskRequest {
        question: text.to_string(),
        age: Some(30),
        monthly_salary: Some(85000.0),
        risk_appetite: Some("medium".to_string()),
    }
}

#[tokio::test]
async fn forwards_question_and_returns_answer() {
    let transport = Arc::new(MockTransport::replying(
        200,
        r#"{"success": true, "message": "Question answered successfully", "answer": "Hold TCS.NS"}"#,
    ));
    let client = AdvisorClient::new(transport.clone());

    let answer = client
        .ask("http://advisor:8000/", &question("TCS"))
        .await
        .expect("ask failed");

    assert_eq!(answer, "Hold TCS.NS");
    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "http://advisor:8000/api/ask");
    assert_eq!(calls[0].1, question("TCS"));
}

#[tokio::test]
async fn blank_question_never_reaches_backend() {
    let transport = Arc::new(MockTransport::replying(200, r#"{"success": true, "answer": "x"}"#));
    let client = AdvisorClient::new(transport.clone());

    let result = client.ask("http://advisor:8000", &question("   ")).await;

    assert_eq!(result, Err("Please enter a question".to_string()));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn backend_failure_surfaces_its_message() {
    let transport = Arc::new(MockTransport::replying(
        500,
        r#"{"success": false, "message": "Error processing question: quota exceeded", "error_details": "quota exceeded", "answer": null}"#,
    ));
    let client = AdvisorClient::new(transport);

    let result = client.ask("http://advisor:8000", &question("Infosys")).await;

    assert_eq!(result, Err("Error processing question: quota exceeded".to_string()));
}

#[tokio::test]
async fn unreachable_backend_reports_connection_failure() {
    let client = AdvisorClient::new(Arc::new(MockTransport::default()));

    let message = client
        .ask("http://advisor:8000", &question("HDFC"))
        .await
        .expect_err("should fail");

    assert!(message.starts_with("Failed to connect to server at http://advisor:8000"));
    assert!(message.ends_with("connection refused"));
}

#[tokio::test]
async fn health_check_parses_status() {
    let client = AdvisorClient::new(Arc::new(MockTransport::replying(
        200,
        r#"{"status": "healthy", "service": "Financial Advisor"}"#,
    )));

    let health = client.check_health("http://advisor:8000").await.expect("health");

    assert_eq!(health.status, "healthy");
    assert_eq!(health.service.as_deref(), Some("Financial Advisor"));
}

#[tokio::test]
async fn unhealthy_backend_is_an_error() {
    let client = AdvisorClient::new(Arc::new(MockTransport::replying(503, "")));

    let result = client.check_health("http://advisor:8000").await;

    assert_eq!(result.unwrap_err(), "health check failed: status 503");
}

#[tokio::test]
async fn answer_flows_into_formatter() {
    let body = serde_json::json!({
        "success": true,
        "answer": "## Summary\n- Target (4,200)\nSources:\nhttps://example.com/tcs",
    })
    .to_string();
    let client = AdvisorClient::new(Arc::new(MockTransport::replying(200, &body)));

    let answer = client
        .ask("http://advisor:8000", &question("TCS target"))
        .await
        .expect("ask failed");
    let html = format_answer(&answer);

    assert!(html.contains(r#"<h2 class="section-header">Summary</h2>"#));
    assert!(html.contains(r#"<span class="number-value">(4,200)</span>"#));
    assert!(html.contains(r#"<a href="https://example.com/tcs" target="_blank" rel="noopener noreferrer">"#));
}
