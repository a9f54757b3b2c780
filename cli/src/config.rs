use anyhow::{Context, Result};
use engine::{HighlightStyle, SearchMode};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Persisted user settings. Loading is tolerant field by field: unknown or
/// ill-typed fields keep their defaults, a missing or unreadable file means
/// all defaults. Saving writes pretty JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub highlight: bool,
    pub search_mode: SearchMode,
    pub hl_mode: HighlightStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight: true,
            search_mode: SearchMode::And,
            hl_mode: HighlightStyle::Default,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Config {
        let body = match fs::read_to_string(path) {
            Ok(body) => body,
            Err(_) => {
                warn!(path = %path.display(), "no config file, using defaults");
                return Config::default();
            }
        };
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => Config::from_value(&value),
            Err(err) => {
                warn!(%err, path = %path.display(), "config file is invalid, using defaults");
                Config::default()
            }
        }
    }

    fn from_value(value: &serde_json::Value) -> Config {
        let mut cfg = Config::default();
        if let Some(b) = value.get("highlight").and_then(|v| v.as_bool()) {
            cfg.highlight = b;
        }
        if let Some(m) = value.get("search_mode").and_then(|v| v.as_str()) {
            if let Ok(mode) = m.parse() {
                cfg.search_mode = mode;
            }
        }
        if let Some(h) = value.get("hl_mode").and_then(|v| v.as_str()) {
            if let Ok(style) = h.parse() {
                cfg.hl_mode = style;
            }
        }
        cfg
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self).context("serializing config")?;
        fs::write(path, body).with_context(|| format!("writing config {}", path.display()))
    }
}
