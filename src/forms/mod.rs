use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AskForm {
    pub question: String,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub monthly_salary: Option<String>,
    #[serde(default)]
    pub risk_appetite: Option<String>,
}

#[derive(Deserialize)]
pub struct SettingsForm {
    pub backend_url: String,
    pub bind_addr: String,
}

#[derive(Deserialize)]
pub struct FormatRequest {
    pub answer: String,
}

#[derive(Serialize)]
pub struct FormatResponse {
    pub html: String,
}
