use std::{collections::HashMap, fs};

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub page_size: u32,
    pub seed_users: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            page_size: 10,
            seed_users: 25,
        }
    }
}

pub fn load_settings() -> Settings {
    let file_cfg = fs::read_to_string("server.toml")
        .ok()
        .and_then(|raw| parse_file_settings(&raw));
    apply_settings(file_cfg, |key| std::env::var(key).ok())
}

fn parse_file_settings(raw: &str) -> Option<HashMap<String, toml::Value>> {
    match toml::from_str::<HashMap<String, toml::Value>>(raw) {
        Ok(values) => Some(values),
        Err(error) => {
            warn!(%error, "ignoring unreadable server.toml");
            None
        }
    }
}

fn apply_settings(
    file_cfg: Option<HashMap<String, toml::Value>>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
            settings.server_bind = v.to_string();
        }
        if let Some(v) = file_cfg.get("page_size").and_then(as_u32) {
            settings.page_size = v;
        }
        if let Some(v) = file_cfg.get("seed_users").and_then(as_u32) {
            settings.seed_users = v;
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("APP__PAGE_SIZE").and_then(|v| v.parse().ok()) {
        settings.page_size = v;
    }
    if let Some(v) = env("APP__SEED_USERS").and_then(|v| v.parse().ok()) {
        settings.seed_users = v;
    }

    settings.page_size = settings.page_size.max(1);
    settings
}

fn as_u32(value: &toml::Value) -> Option<u32> {
    value.as_integer().and_then(|v| u32::try_from(v).ok())
}
