use std::{fs, path::Path};

use serde::Deserialize;
use tracing::warn;

use crate::list_state::ResponseOrdering;

pub const SETTINGS_FILE: &str = "usuarios.toml";
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub response_ordering: ResponseOrdering,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            response_ordering: ResponseOrdering::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    response_ordering: Option<ResponseOrdering>,
}

/// Defaults, then `usuarios.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_base_url {
                    settings.api_base_url = v;
                }
                if let Some(v) = file_cfg.response_ordering {
                    settings.response_ordering = v;
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable settings file");
            }
        }
    }

    if let Some(v) = env("USUARIOS_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = env("APP__RESPONSE_ORDERING") {
        match v.parse() {
            Ok(ordering) => settings.response_ordering = ordering,
            Err(error) => warn!(%error, "ignoring APP__RESPONSE_ORDERING"),
        }
    }

    settings
}
