use async_trait::async_trait;
use gloo_net::http::{Method, Request, RequestBuilder};
use leptos::prelude::set_timeout_with_handle;
use posts_client::api::{decode_envelope, ensure_new_post, ensure_post_id, ensure_post_update};
use posts_client::constants::DEFAULT_API_BASE_URL;
use posts_client::{
    ApiError, ApiResponse, ApiResult, ClientConfig, ListParams, NewPost, Post, PostUpdate,
    PostsApi, PostsPage,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::AbortController;

const API_BASE_URL: &str = match option_env!("POSTS_API_BASE_URL") {
    Some(value) => value,
    None => DEFAULT_API_BASE_URL,
};

/// Конфигурация клиента для браузера: адрес API задаётся при сборке.
pub(crate) fn client_config() -> ClientConfig {
    ClientConfig::new(API_BASE_URL)
}

/// Клиент API поверх `fetch` (gloo-net).
#[derive(Debug, Clone)]
pub(crate) struct GlooClient {
    config: ClientConfig,
}

impl GlooClient {
    pub(crate) fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let controller = AbortController::new()
            .map_err(|_| ApiError::network("failed to create AbortController"))?;

        let mut builder = RequestBuilder::new(&self.config.endpoint(path))
            .method(method)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&controller.signal()));
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
        }

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::network(err.to_string()))?;

        // fetch сам не ограничивает время ожидания: по таймауту запрос
        // обрывается через AbortController.
        let timeout = set_timeout_with_handle(move || controller.abort(), self.config.timeout).ok();
        let result = send(request).await;
        if let Some(timeout) = timeout {
            timeout.clear();
        }
        result
    }
}

async fn send<T: DeserializeOwned>(request: Request) -> ApiResult<ApiResponse<T>> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::network(err.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| ApiError::network(err.to_string()))?;

    decode_envelope(status, &text)
}

#[async_trait(?Send)]
impl PostsApi for GlooClient {
    async fn get_all(&self, params: &ListParams) -> ApiResult<ApiResponse<PostsPage>> {
        self.request(Method::GET, "/posts", &params.query_pairs(), None::<&()>)
            .await
    }

    async fn get_by_id(&self, id: i64) -> ApiResult<ApiResponse<Post>> {
        ensure_post_id(id)?;
        self.request(Method::GET, &format!("/posts/{id}"), &[], None::<&()>)
            .await
    }

    async fn create(&self, post: &NewPost) -> ApiResult<ApiResponse<Post>> {
        ensure_new_post(post)?;
        self.request(Method::POST, "/posts", &[], Some(post)).await
    }

    async fn update(&self, id: i64, update: &PostUpdate) -> ApiResult<ApiResponse<Post>> {
        ensure_post_update(id, update)?;
        self.request(Method::PUT, &format!("/posts/{id}"), &[], Some(update))
            .await
    }

    async fn delete(&self, id: i64) -> ApiResult<ApiResponse<Value>> {
        ensure_post_id(id)?;
        self.request(Method::DELETE, &format!("/posts/{id}"), &[], None::<&()>)
            .await
    }

    async fn check_health(&self) -> ApiResult<ApiResponse<Value>> {
        self.request(Method::GET, "/health", &[], None::<&()>).await
    }
}
