//! Endpoint configuration.
//!
//! Resolution order: `DOSSIER_ENDPOINT` env var, then
//! `~/.dossier/config.toml`, then the default local server address.

use serde::Deserialize;
use std::{env, path::PathBuf};

/// Where the report server listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/generate-report";

#[derive(Debug, Default, Deserialize)]
pub struct DossierConfig {
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    pub endpoint: Option<String>,
}

impl DossierConfig {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dossier").join("config.toml"))
}

/// The generation endpoint to use for this session.
pub fn resolve_endpoint() -> String {
    if let Ok(value) = env::var("DOSSIER_ENDPOINT")
        && !value.trim().is_empty()
    {
        return value.trim().to_string();
    }

    if let Some(endpoint) = DossierConfig::load()
        .and_then(|config| config.server)
        .and_then(|server| server.endpoint)
    {
        let expanded = expand_env_vars(&endpoint);
        let expanded = expanded.trim();
        if !expanded.is_empty() {
            return expanded.to_string();
        }
    }

    DEFAULT_ENDPOINT.to_string()
}

/// Expand `${VAR}` references in a config value. Unknown variables expand
/// to the empty string; an unterminated reference is kept literally.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
