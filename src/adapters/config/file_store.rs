use crate::{
    domain::TaskId,
    ports::{AppConfig, ConfigError, ConfigResult, ConfigStore},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const TOKEN_ENV_VAR: &str = "ATTACHMENTS_TOKEN";

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    default_task: Option<String>,
    cache_ttl_seconds: Option<u64>,
}

pub struct FileConfigStore {
    config_path: PathBuf,
    token_path: PathBuf,
    keyring_service: String,
}

impl FileConfigStore {
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::ReadError("Cannot determine config directory".to_string())
        })?;

        Ok(Self::in_dir(&config_dir.join("task-attachments")))
    }

    /// Store rooted at `dir`, holding `config.json` and the `.token` fallback.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config_path: dir.join("config.json"),
            token_path: dir.join(".token"),
            keyring_service: "task-attachments".to_string(),
        }
    }

    async fn ensure_config_dir(&self) -> ConfigResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }
        Ok(())
    }

    async fn get_token_from_file(&self) -> ConfigResult<Option<String>> {
        match fs::read_to_string(&self.token_path).await {
            Ok(token) => {
                // Only the line ending an editor may add; the token itself is verbatim
                let token = token.strip_suffix('\n').unwrap_or(&token);
                let token = token.strip_suffix('\r').unwrap_or(token);
                Ok(Some(token.to_string()))
            }
            Err(_) => Ok(None),
        }
    }

    async fn remove_token_file(&self) -> ConfigResult<()> {
        match fs::remove_file(&self.token_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::WriteError(e.to_string())),
        }
    }

    async fn set_token_in_file(&self, token: &str) -> ConfigResult<()> {
        self.ensure_config_dir().await?;
        fs::write(&self.token_path, token)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.token_path)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.token_path, perms)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        Ok(())
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn load_config(&self) -> ConfigResult<AppConfig> {
        let config_file: ConfigFile = match fs::read_to_string(&self.config_path).await {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?,
            Err(_) => ConfigFile::default(),
        };

        let mut api_token = self.get_api_token().await?;
        if api_token.is_none() {
            api_token = std::env::var(TOKEN_ENV_VAR).ok();
        }

        let mut config = AppConfig {
            api_token,
            default_task: config_file.default_task.map(TaskId),
            cache_ttl_seconds: config_file.cache_ttl_seconds.unwrap_or(300),
            ..Default::default()
        };
        if let Some(url) = config_file.base_url {
            config.set_base_url(&url);
        }

        Ok(config)
    }

    async fn save_config(&self, config: &AppConfig) -> ConfigResult<()> {
        self.ensure_config_dir().await?;

        let config_file = ConfigFile {
            base_url: config.base_url.clone(),
            default_task: config.default_task.as_ref().map(|t| t.0.clone()),
            cache_ttl_seconds: Some(config.cache_ttl_seconds),
        };

        let content = serde_json::to_string_pretty(&config_file)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        fs::write(&self.config_path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        if let Some(token) = &config.api_token {
            self.set_api_token(token).await?;
        }

        Ok(())
    }

    async fn get_api_token(&self) -> ConfigResult<Option<String>> {
        match keyring::Entry::new(&self.keyring_service, "api_token") {
            Ok(entry) => match entry.get_password() {
                Ok(token) => return Ok(Some(token)),
                Err(keyring::Error::NoEntry) => {}
                Err(_) => {
                    tracing::warn!("Keyring not available, falling back to file storage");
                }
            },
            Err(_) => {
                tracing::warn!("Keyring service not available, falling back to file storage");
            }
        }

        self.get_token_from_file().await
    }

    async fn set_api_token(&self, token: &str) -> ConfigResult<()> {
        match keyring::Entry::new(&self.keyring_service, "api_token") {
            Ok(entry) => match entry.set_password(token) {
                Ok(()) => return Ok(()),
                Err(_) => {
                    tracing::warn!("Failed to store in keyring, falling back to file storage");
                }
            },
            Err(_) => {
                tracing::warn!("Keyring not available, using file storage");
            }
        }

        self.set_token_in_file(token).await
    }

    async fn clear_api_token(&self) -> ConfigResult<()> {
        match keyring::Entry::new(&self.keyring_service, "api_token") {
            Ok(entry) => match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => {
                    tracing::warn!("Failed to remove token from keyring: {}", e);
                }
            },
            Err(_) => {
                tracing::warn!("Keyring not available, clearing file storage only");
            }
        }

        self.remove_token_file().await
    }
}
