use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    API_BASE_URL_ENV, API_TIMEOUT_ENV, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

#[derive(Debug, Error, PartialEq, Eq)]
/// Ошибки чтения конфигурации клиента.
pub enum ConfigError {
    /// Значение переменной окружения не удалось разобрать.
    #[error("failed to parse {key}: expected {expected}, got {value:?}")]
    Invalid {
        /// Имя переменной.
        key: &'static str,
        /// Что ожидалось.
        expected: &'static str,
        /// Фактическое значение.
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Конфигурация клиента, передаётся в клиент при создании.
pub struct ClientConfig {
    /// Базовый URL API, например `http://localhost:3001/api`.
    pub base_url: String,
    /// Таймаут одного запроса.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Создаёт конфигурацию с указанным базовым URL и таймаутом по умолчанию.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Заменяет таймаут запроса.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Читает `POSTS_API_BASE_URL` и `POSTS_API_TIMEOUT_SECS`, подставляя
    /// значения по умолчанию для отсутствующих или пустых переменных.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(API_BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = match lookup(API_TIMEOUT_ENV).map(|value| value.trim().to_string()) {
            Some(raw) if !raw.is_empty() => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: API_TIMEOUT_ENV,
                        expected: "positive integer",
                        value: raw,
                    });
                }
            },
            _ => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Полный URL для пути относительно базового адреса.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
