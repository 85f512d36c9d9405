use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub upload_dir: PathBuf,
    /// Origin allowed by CORS. `None` allows any `http://localhost` origin.
    pub allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            allowed_origin: None,
        }
    }
}

impl AppConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let upload_dir = value("UPLOAD_DIR").map(PathBuf::from).unwrap_or_else(|| {
            info!("UPLOAD_DIR not set, using default: {}", DEFAULT_UPLOAD_DIR);
            PathBuf::from(DEFAULT_UPLOAD_DIR)
        });

        Self {
            upload_dir,
            allowed_origin: value("ALLOWED_ORIGIN"),
        }
    }
}
