use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, Context};
use url::Url;
use will_core::DEFAULT_API_BASE;

pub const DEFAULT_CONFIG_FILE: &str = "willcli.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub database_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            database_url: "sqlite://./data/willcli.db".into(),
        }
    }
}

/// Defaults, then the TOML file (if readable), then environment variables.
pub fn load_settings(config_path: &Path) -> anyhow::Result<Settings> {
    let file_contents = fs::read_to_string(config_path).ok();
    let settings = resolve_settings(file_contents.as_deref(), |key| std::env::var(key).ok())?;
    tracing::debug!(
        config = %config_path.display(),
        api_base = %settings.api_base,
        "settings loaded"
    );
    Ok(settings)
}

pub fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
            .context("config file must be a flat table of string values")?;
        if let Some(v) = file_cfg.get("api_base") {
            settings.api_base = v.clone();
        }
        if let Some(v) = file_cfg.get("database_url") {
            settings.database_url = v.clone();
        }
    }

    if let Some(v) = env("WILL_API_BASE") {
        settings.api_base = v;
    }
    if let Some(v) = env("APP__API_BASE") {
        settings.api_base = v;
    }

    if let Some(v) = env("DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = v;
    }

    settings.api_base = normalize_api_base(&settings.api_base)?;
    settings.database_url = normalize_database_url(&settings.database_url);
    Ok(settings)
}

fn normalize_api_base(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("invalid api base url '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(
            "api base url must use http or https, got '{}'",
            url.scheme()
        ));
    }
    Ok(trimmed.to_string())
}

pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:")
        || raw_database_url.starts_with("sqlite://")
        || raw_database_url.contains("://")
    {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        let path = path.replace('\\', "/");
        return format!("sqlite://{path}");
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
