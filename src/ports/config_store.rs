use crate::domain::TaskId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    ReadError(String),

    #[error("Failed to write configuration: {0}")]
    WriteError(String),

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub api_token: Option<String>,
    pub default_task: Option<TaskId>,
    pub cache_ttl_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            default_task: None,
            cache_ttl_seconds: 300, // 5 minutes
        }
    }
}

impl AppConfig {
    /// Stores the API root without a trailing slash, since request paths
    /// are appended with a leading one.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = Some(url.trim_end_matches('/').to_string());
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load_config(&self) -> ConfigResult<AppConfig>;
    async fn save_config(&self, config: &AppConfig) -> ConfigResult<()>;
    async fn get_api_token(&self) -> ConfigResult<Option<String>>;
    async fn set_api_token(&self, token: &str) -> ConfigResult<()>;
    /// Forget any stored token so later runs send no `Authorization` header.
    async fn clear_api_token(&self) -> ConfigResult<()>;
}
