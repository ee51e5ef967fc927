use serde::{Deserialize, Serialize};

/// Form fields posted to the advisor backend's `/api/ask`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_appetite: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
