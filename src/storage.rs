use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub backend_url: String,
    pub bind_addr: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppSettings {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.backend_url.trim();
        if url.is_empty() {
            return Err("backend_url must not be empty".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("backend_url must start with http:// or https://".to_string());
        }
        self.bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| format!("bind_addr is not a valid address: {err}"))?;
        Ok(())
    }

    /// Applies `ADVISOR_BACKEND_URL` and `ADVISOR_BIND_ADDR` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = non_empty_env("ADVISOR_BACKEND_URL") {
            self.backend_url = url;
        }
        if let Some(addr) = non_empty_env("ADVISOR_BIND_ADDR") {
            self.bind_addr = addr;
        }
        self
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn base_dir() -> PathBuf {
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("advisor");
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("advisor");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("advisor");
    }
    PathBuf::from("advisor-data")
}

pub fn settings_path() -> PathBuf {
    base_dir().join("settings.json")
}

pub async fn load_settings(path: &Path) -> Result<AppSettings, String> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => serde_json::from_str(&contents)
            .map_err(|err| format!("failed to parse settings: {err}")),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AppSettings::default()),
        Err(err) => Err(format!("failed to read settings: {err}")),
    }
}

/// Settings from disk with environment overrides on top; this is what the
/// server actually runs with.
pub async fn effective_settings(path: &Path) -> Result<AppSettings, String> {
    load_settings(path).await.map(AppSettings::with_env_overrides)
}

pub async fn save_settings(path: &Path, settings: &AppSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| format!("failed to create settings dir: {err}"))?;
    }

    let data = serde_json::to_string_pretty(settings)
        .map_err(|err| format!("failed to serialize settings: {err}"))?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, data)
        .await
        .map_err(|err| format!("failed to write temp settings: {err}"))?;

    if tokio::fs::metadata(path).await.is_ok() {
        tokio::fs::remove_file(path)
            .await
            .map_err(|err| format!("failed to remove old settings: {err}"))?;
    }

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|err| format!("failed to move settings into place: {err}"))
}
