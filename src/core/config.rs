use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::topology::{CpuTopology, DEFAULT_CPU_DIR};
use crate::error::GovError;
use crate::platform::elevation::{SuExecutor, DEFAULT_SU_BINARY, DENIED_EXIT_CODE};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the `cpuN` device nodes
    #[serde(default)]
    pub cpu_dir: Option<String>,
    /// Elevation helper used to run the write commands
    #[serde(default)]
    pub su_binary: Option<String>,
    /// Exit status of the helper meaning "elevation refused"
    #[serde(default)]
    pub denied_exit_code: Option<i32>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)
            .map_err(GovError::from)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // If the file is empty or corrupted, return default config
        if data.is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_slice(&data).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring unreadable config file {:?}: {}",
                config_path,
                e
            );
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(GovError::from)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_vec_pretty(self).map_err(GovError::from)?;

        fs::write(config_path, data)
            .map_err(GovError::from)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("govctl").join("config.json"))
    }

    pub fn cpu_dir(&self) -> &str {
        self.cpu_dir.as_deref().unwrap_or(DEFAULT_CPU_DIR)
    }

    pub fn su_binary(&self) -> &str {
        self.su_binary.as_deref().unwrap_or(DEFAULT_SU_BINARY)
    }

    pub fn denied_exit_code(&self) -> i32 {
        self.denied_exit_code.unwrap_or(DENIED_EXIT_CODE)
    }

    pub fn set_cpu_dir(&mut self, path: String) -> crate::Result<()> {
        if path.trim().is_empty() {
            return Err(GovError::config("cpu directory cannot be empty"));
        }
        self.cpu_dir = Some(path);
        Ok(())
    }

    pub fn set_su_binary(&mut self, program: String) -> crate::Result<()> {
        validate_su_binary(&program)?;
        self.su_binary = Some(program);
        Ok(())
    }

    pub fn set_denied_exit_code(&mut self, code: i32) -> crate::Result<()> {
        if !(0..=255).contains(&code) {
            return Err(GovError::config(format!(
                "exit code {} is outside 0..=255",
                code
            )));
        }
        self.denied_exit_code = Some(code);
        Ok(())
    }

    /// Topology reader for the configured cpu directory
    pub fn topology(&self) -> CpuTopology {
        CpuTopology::new(self.cpu_dir())
    }

    /// Executor for the configured elevation helper
    pub fn executor(&self) -> SuExecutor {
        SuExecutor::with_program(self.su_binary()).denied_exit_code(self.denied_exit_code())
    }
}

/// The helper is spawned without a shell, so it must be a single program name or path
pub fn validate_su_binary(program: &str) -> crate::Result<()> {
    if program.is_empty() {
        return Err(GovError::config("elevation program cannot be empty"));
    }
    if program.chars().any(char::is_whitespace) {
        return Err(GovError::config(format!(
            "elevation program '{}' must not contain whitespace",
            program
        )));
    }
    Ok(())
}
