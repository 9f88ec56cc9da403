use serde_json::Value;
use thiserror::Error;

use crate::constants::{messages, status};

#[derive(Debug, Clone, Error)]
/// Ошибки клиентской библиотеки `posts-client`.
///
/// Все три вида ошибок дают одинаковую форму: сообщение, статус и
/// (для HTTP-ошибок) разобранное тело ответа.
pub enum ApiError {
    /// Запрос отклонён до отправки: не хватает id или обязательных полей.
    #[error("{message}")]
    Validation {
        /// Описание проблемы.
        message: String,
    },

    /// Сервер ответил не-2xx статусом.
    #[error("{message}")]
    Http {
        /// HTTP-статус ответа.
        status: u16,
        /// Сообщение из поля `error` ответа или `HTTP {status}`.
        message: String,
        /// Тело ответа, если это был JSON.
        response: Option<Value>,
    },

    /// Ответа нет или его не удалось разобрать.
    #[error("{message}")]
    Network {
        /// Описание транспортной ошибки.
        message: String,
    },
}

/// Результат операций `posts-client`.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Ошибка проверки аргументов до отправки запроса (статус 400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Сетевая ошибка (статус 0).
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Собирает HTTP-ошибку из статуса и (возможно пустого) тела ответа.
    ///
    /// Сообщение берётся из поля `error` JSON-тела, иначе `HTTP {status}`.
    pub fn from_http_status(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|value| value.get("error"))
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {status}"));

        Self::Http {
            status,
            message,
            response: body,
        }
    }

    /// Статус ошибки: 400 для валидации, HTTP-статус, 0 для сетевых ошибок.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation { .. } => status::BAD_REQUEST,
            Self::Http { status, .. } => *status,
            Self::Network { .. } => status::NETWORK_ERROR,
        }
    }

    /// Сообщение ошибки.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Http { message, .. }
            | Self::Network { message } => message,
        }
    }

    /// Разобранное тело ответа сервера, если оно было.
    pub fn response(&self) -> Option<&Value> {
        match self {
            Self::Http { response, .. } => response.as_ref(),
            _ => None,
        }
    }

    /// `true`, если до сервера не удалось достучаться.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Сообщение об ошибке для показа пользователю.
pub struct ErrorReport {
    /// Текст для пользователя.
    pub message: String,
    /// Ошибка сети (показывается отдельно от остальных).
    pub is_network_error: bool,
}

/// Превращает ошибку клиента в сообщение для интерфейса.
pub fn describe_error(error: &ApiError) -> ErrorReport {
    if error.is_network_error() {
        return ErrorReport {
            message: messages::NETWORK_ERROR.to_string(),
            is_network_error: true,
        };
    }

    let message = error.message().trim();
    ErrorReport {
        message: if message.is_empty() {
            messages::UNEXPECTED_ERROR.to_string()
        } else {
            message.to_string()
        },
        is_network_error: false,
    }
}
