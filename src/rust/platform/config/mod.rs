#![cfg(feature = "cli")]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::engine::units::{DisplayMetrics, MetricsProvider};

pub const TOML_FILE: &str = "metrickit.toml";
pub const JSON_FILE: &str = "metrickit.json";
pub const DOT_FILE: &str = ".metrickit";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerSection,
    pub display: DisplayMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSection {
    /// Whether timing sessions record and report anything.
    pub debug: bool,
    pub tag: String,
    pub label: String,
    pub from_start: bool,
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            debug: false,
            tag: "metrickit".to_string(),
            label: "session".to_string(),
            from_start: false,
        }
    }
}

impl MetricsProvider for AppConfig {
    fn display_metrics(&self) -> DisplayMetrics {
        self.display
    }
}

impl AppConfig {
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        let candidates: Vec<PathBuf> = [TOML_FILE, JSON_FILE, DOT_FILE]
            .iter()
            .map(|name| root.join(name))
            .filter(|path| path.exists())
            .collect();

        // Candidates are collected in priority order
        let config = match candidates.first() {
            None => AppConfig::default(),
            Some(path) => load_config_by_path(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Write the default config as `metrickit.toml` under `root`.
    pub fn write_default(root: impl AsRef<Path>) -> Result<PathBuf> {
        let root = root.as_ref();
        let path = root.join(TOML_FILE);
        if path.exists() {
            bail!("config file already exists: {}", path.display());
        }
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create config directory: {}", root.display()))?;
        let raw = AppConfig::default().to_toml()?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize config")
    }

    pub fn validate(&self) -> Result<()> {
        validate_metrics(&self.display)
    }
}

/// Every factor must be finite and strictly positive.
pub fn validate_metrics(display: &DisplayMetrics) -> Result<()> {
    for (name, value) in [
        ("density", display.density),
        ("scaled_density", display.scaled_density),
        ("xdpi", display.xdpi),
    ] {
        if !value.is_finite() || value <= 0.0 {
            bail!("display.{} must be a positive number, got {}", name, value);
        }
    }
    Ok(())
}

fn load_json(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = serde_json::from_str(&file)
        .with_context(|| format!("invalid JSON config: {}", path.display()))?;
    Ok(config)
}

fn load_toml(path: &Path) -> Result<AppConfig> {
    let file = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str(&file)
        .with_context(|| format!("invalid TOML config: {}", path.display()))?;
    Ok(config)
}

fn load_config_by_path(path: &Path) -> Result<AppConfig> {
    // ".metrickit" may hold either format, detect by content
    if path.file_name().and_then(|s| s.to_str()) == Some(DOT_FILE) {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        if raw.trim_start().starts_with('{') {
            return serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON config: {}", path.display()));
        }
        return toml::from_str(&raw)
            .with_context(|| format!("invalid TOML config: {}", path.display()));
    }

    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("json") => load_json(path),
        _ => load_toml(path),
    }
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
