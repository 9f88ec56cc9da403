use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::constants::messages;
use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, ListParams, NewPost, Post, PostUpdate, PostsPage};

/// Операции над ресурсом `posts`.
///
/// Реализации: [`crate::HttpClient`] (reqwest) и клиент на gloo-net в
/// браузерном приложении. Методы возвращают конверт сервера как есть;
/// некорректные аргументы отклоняются до отправки запроса.
#[async_trait(?Send)]
pub trait PostsApi {
    /// `GET /posts` с необязательными `page`, `limit`, `search`.
    async fn get_all(&self, params: &ListParams) -> ApiResult<ApiResponse<PostsPage>>;

    /// `GET /posts/:id`.
    async fn get_by_id(&self, id: i64) -> ApiResult<ApiResponse<Post>>;

    /// `POST /posts`.
    async fn create(&self, post: &NewPost) -> ApiResult<ApiResponse<Post>>;

    /// `PUT /posts/:id`.
    async fn update(&self, id: i64, update: &PostUpdate) -> ApiResult<ApiResponse<Post>>;

    /// `DELETE /posts/:id`.
    async fn delete(&self, id: i64) -> ApiResult<ApiResponse<Value>>;

    /// `GET /health`.
    async fn check_health(&self) -> ApiResult<ApiResponse<Value>>;
}

/// Отклоняет пустой (нулевой) идентификатор поста.
pub fn ensure_post_id(id: i64) -> ApiResult<()> {
    if id == 0 {
        return Err(ApiError::validation(messages::POST_ID_REQUIRED));
    }
    Ok(())
}

/// Проверяет, что у нового поста заполнены все обязательные поля.
pub fn ensure_new_post(post: &NewPost) -> ApiResult<()> {
    if post.title.is_empty() || post.body.is_empty() || post.user_id == 0 {
        return Err(ApiError::validation(messages::POST_FIELDS_REQUIRED));
    }
    Ok(())
}

/// Проверяет id и поля обновления.
pub fn ensure_post_update(id: i64, update: &PostUpdate) -> ApiResult<()> {
    ensure_post_id(id)?;
    if update.title.is_empty() || update.body.is_empty() {
        return Err(ApiError::validation(messages::UPDATE_FIELDS_REQUIRED));
    }
    Ok(())
}

/// Разбирает ответ сервера в конверт.
///
/// Не-2xx статус превращается в [`ApiError::Http`], тело которого
/// сохраняется, если это JSON. Неразбираемое тело успешного ответа считается
/// сетевой ошибкой.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<ApiResponse<T>> {
    if !(200..300).contains(&status) {
        let parsed = serde_json::from_str::<Value>(body).ok();
        return Err(ApiError::from_http_status(status, parsed));
    }

    serde_json::from_str::<ApiResponse<T>>(body)
        .map_err(|err| ApiError::network(format!("invalid response body: {err}")))
}
