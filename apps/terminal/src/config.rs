use std::{fs, path::Path};

use anyhow::Context;
use directory_core::DEFAULT_ENDPOINT;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "directory.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub database_url: String,
    pub search_debounce_ms: u64,
    pub persist_favorites: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            database_url: "sqlite://./data/directory.db".into(),
            search_debounce_ms: 300,
            persist_favorites: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    database_url: Option<String>,
    search_debounce_ms: Option<u64>,
    persist_favorites: Option<bool>,
}

/// Defaults, then the settings file, then environment overrides. A missing
/// default file is fine; a missing explicit one is an error.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("invalid settings file '{}'", path.display()))?;
            apply_file(&mut settings, file_cfg);
        }
        Err(err) if config_path.is_some() => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
        Err(_) => {}
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.endpoint {
        settings.endpoint = v;
    }
    if let Some(v) = file_cfg.database_url {
        settings.database_url = v;
    }
    if let Some(v) = file_cfg.search_debounce_ms {
        settings.search_debounce_ms = v;
    }
    if let Some(v) = file_cfg.persist_favorites {
        settings.persist_favorites = v;
    }
}

pub fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DIRECTORY_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = var("APP__ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = var("DIRECTORY_DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = var("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    for key in ["DIRECTORY_DEBOUNCE_MS", "APP__SEARCH_DEBOUNCE_MS"] {
        if let Some(parsed) = var(key).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.search_debounce_ms = parsed;
        }
    }

    for key in ["DIRECTORY_PERSIST_FAVORITES", "APP__PERSIST_FAVORITES"] {
        if let Some(parsed) = var(key).and_then(|v| v.trim().parse::<bool>().ok()) {
            settings.persist_favorites = parsed;
        }
    }
}

/// Accepts a bare file path or any sqlx sqlite URL and returns the URL form.
pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw = raw_database_url.trim();
    if raw.is_empty() {
        return Settings::default().database_url;
    }
    if raw.contains("://") || raw.starts_with("sqlite::memory:") {
        return raw.to_string();
    }

    let path = raw.strip_prefix("sqlite:").unwrap_or(raw).replace('\\', "/");
    format!("sqlite://{path}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
