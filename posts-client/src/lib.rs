//! Клиентская библиотека для REST API постов.
//!
//! Содержит:
//! - константы и конфигурацию клиента (`ClientConfig`);
//! - клиентскую валидацию ввода;
//! - трейт `PostsApi` и его HTTP-реализацию на `reqwest`;
//! - состояние вызовов и списка постов (`ApiCall`, `PostsStore`).
//!
//! Все ответы сервера приходят в конверте `{success, data, error}`; ошибки
//! сведены к одному типу `ApiError` с тремя видами: валидация, HTTP, сеть.

pub mod api;
pub mod config;
pub mod constants;
mod error;
pub mod hooks;
#[cfg(not(target_arch = "wasm32"))]
mod http_client;
mod models;
pub mod pagination;
pub mod validation;

pub use api::PostsApi;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorReport, describe_error};
pub use hooks::{ApiCall, CallState, PostsSnapshot, PostsStore};
#[cfg(not(target_arch = "wasm32"))]
pub use http_client::HttpClient;
pub use models::{ApiResponse, ListParams, NewPost, Pagination, Post, PostUpdate, PostsPage};
