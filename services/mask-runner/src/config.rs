use std::{env, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use mask_core::MaskExtension;
use serde::{Deserialize, Serialize};

pub const MAX_BATCH_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Catalog name of the function to apply
    pub function: String,

    /// Rows handed to the function per call
    pub batch_size: usize,

    /// Newline-delimited JSON input; stdin when unset
    pub input_path: Option<PathBuf>,

    /// Abort on the first malformed or rejected row
    pub fail_fast: bool,

    /// Log level
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            function: String::new(),
            batch_size: 2048,
            input_path: None,
            fail_fast: false,
            log_level: "info".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source, e.g. the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let function = lookup("MASK_FUNCTION")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow!("MASK_FUNCTION must be set"))?;

        let mut config = RunnerConfig {
            function,
            ..RunnerConfig::default()
        };

        if let Some(size) = lookup("MASK_BATCH_SIZE") {
            config.batch_size = size
                .trim()
                .parse::<usize>()
                .context("failed to parse MASK_BATCH_SIZE as usize")?;
        }

        if let Some(path) = lookup("MASK_INPUT_PATH") {
            if !path.trim().is_empty() {
                config.input_path = Some(PathBuf::from(path));
            }
        }

        if let Some(flag) = lookup("MASK_FAIL_FAST") {
            config.fail_fast =
                parse_bool(&flag).context("failed to parse MASK_FAIL_FAST as bool")?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            if !level.trim().is_empty() {
                config.log_level = level;
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let catalog = MaskExtension::catalog();
        if !catalog.contains(&self.function) {
            anyhow::bail!(
                "MASK_FUNCTION '{}' is not one of: {}",
                self.function,
                catalog.names().join(", ")
            );
        }

        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            anyhow::bail!("MASK_BATCH_SIZE must be between 1 and {}", MAX_BATCH_SIZE);
        }

        if let Some(path) = &self.input_path {
            if !path.is_file() {
                anyhow::bail!("Input file not found: {:?}", path);
            }
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    let value = value.trim();
    value.parse::<bool>().or_else(|_| match value {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(anyhow!("invalid boolean value: {}", other)),
    })
}
