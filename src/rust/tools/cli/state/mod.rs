#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::platform::config::AppConfig;
use crate::tools::logger::Logger;

#[derive(Clone)]
pub struct CliContext {
    logger: Arc<Logger>,
    config: Arc<AppConfig>,
    config_dir: PathBuf,
}

impl CliContext {
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();
        let config = AppConfig::load(&config_dir)?;
        Ok(Self {
            logger: Arc::new(Logger::new()),
            config: Arc::new(config),
            config_dir,
        })
    }

    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
