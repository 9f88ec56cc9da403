use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::{PostsApi, decode_envelope, ensure_new_post, ensure_post_id, ensure_post_update};
use crate::config::ClientConfig;
use crate::constants::CONNECT_TIMEOUT_SECS;
use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, ListParams, NewPost, Post, PostUpdate, PostsPage};

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API постов.
pub struct HttpClient {
    config: ClientConfig,
    client: Client,
}

impl HttpClient {
    /// Создаёт клиент; таймаут запроса берётся из конфигурации.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::network(format!("failed to build http client: {err}")))?;

        Ok(Self { config, client })
    }

    /// Конфигурация, с которой создан клиент.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.config.endpoint(path))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    /// Универсальный запрос с необязательным JSON-телом.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.build(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<ApiResponse<T>> {
        let request = request.build().map_err(map_transport_error)?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(map_transport_error)
            .inspect_err(|err| warn!(%method, %url, error = %err, "request failed"))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(map_transport_error)?;

        decode_envelope(status, &text)
            .inspect_err(|err| warn!(%method, %url, status, error = %err, "request returned error"))
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::network(format!("request timed out: {err}"));
    }
    ApiError::network(err.to_string())
}

#[async_trait(?Send)]
impl PostsApi for HttpClient {
    async fn get_all(&self, params: &ListParams) -> ApiResult<ApiResponse<PostsPage>> {
        let request = self
            .build(Method::GET, "/posts")
            .query(&params.query_pairs());
        self.send(request).await
    }

    async fn get_by_id(&self, id: i64) -> ApiResult<ApiResponse<Post>> {
        ensure_post_id(id)?;
        self.request(Method::GET, &format!("/posts/{id}"), None::<&()>)
            .await
    }

    async fn create(&self, post: &NewPost) -> ApiResult<ApiResponse<Post>> {
        ensure_new_post(post)?;
        self.request(Method::POST, "/posts", Some(post)).await
    }

    async fn update(&self, id: i64, update: &PostUpdate) -> ApiResult<ApiResponse<Post>> {
        ensure_post_update(id, update)?;
        self.request(Method::PUT, &format!("/posts/{id}"), Some(update))
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<ApiResponse<Value>> {
        ensure_post_id(id)?;
        self.request(Method::DELETE, &format!("/posts/{id}"), None::<&()>)
            .await
    }

    async fn check_health(&self) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::GET, "/health", None::<&()>).await
    }
}
