use crate::env::env_flag_with;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const TOKEN_ENV: &str = "BOTPERMS_TOKEN";
pub const DRY_RUN_ENV: &str = "BOTPERMS_DRY_RUN";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub default_chat_id: Option<i64>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub dry_run: bool,
}

const fn default_timeout() -> u64 {
    30
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = config_file_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path_with(config_path, |key| std::env::var(key).ok())
    }

    /// Loads `config_path`, resolving environment overrides through `env`.
    pub fn load_from_path_with<F>(config_path: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            ConfigError::Invalid(format!(
                "Cannot read config at {}: {}",
                config_path.display(),
                e
            ))
        })?;
        let mut config = Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Invalid(msg) => {
                ConfigError::Invalid(format!("{msg} (in {})", config_path.display()))
            }
            other => other,
        })?;
        let dry_run = env_flag_with(DRY_RUN_ENV, &env);
        config.apply_env_overrides(env(TOKEN_ENV), dry_run);
        config.validate()?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Invalid(format!("Invalid TOML: {e}")))
    }

    fn apply_env_overrides(&mut self, token: Option<String>, dry_run: bool) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.telegram_bot_token = token;
        }
        self.dry_run |= dry_run;
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram_bot_token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "telegram_bot_token must not be empty".to_string(),
            ));
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            return Err(ConfigError::Invalid(
                "timeout_seconds must be between 1 and 600".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(".config").join("botperms").join("config.toml"))
}
