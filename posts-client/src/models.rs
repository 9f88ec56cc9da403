use serde::{Deserialize, Serialize};

use crate::constants::{messages, status};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста (назначается сервером).
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Идентификатор автора.
    pub user_id: i64,
    /// Время создания в формате сервера, если он его присылает.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Время последнего обновления в формате сервера.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Данные для создания поста.
pub struct NewPost {
    /// Заголовок.
    pub title: String,
    /// Текст.
    pub body: String,
    /// Автор.
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Данные для обновления поста.
pub struct PostUpdate {
    /// Новый заголовок.
    pub title: String,
    /// Новый текст.
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Метаданные пагинации, которые считает сервер.
pub struct Pagination {
    /// Текущая страница (с 1).
    pub current_page: u32,
    /// Всего страниц.
    pub total_pages: u32,
    /// Всего постов с учётом поиска.
    pub total_items: u64,
    /// Есть ли следующая страница.
    pub has_next_page: bool,
    /// Есть ли предыдущая страница.
    pub has_prev_page: bool,
}

impl Pagination {
    /// Пересчитывает итоги после локального удаления одного поста.
    ///
    /// `limit`: размер страницы последнего запроса.
    pub fn after_removal(&self, limit: u32) -> Self {
        let total_items = self.total_items.saturating_sub(1);
        let limit = u64::from(limit.max(1));
        let total_pages = u32::try_from(total_items.div_ceil(limit)).unwrap_or(u32::MAX);

        Self {
            current_page: self.current_page,
            total_pages,
            total_items,
            has_next_page: self.current_page < total_pages,
            has_prev_page: self.current_page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// `data` ответа на `GET /posts`.
pub struct PostsPage {
    /// Посты текущей страницы.
    pub posts: Vec<Post>,
    /// Пагинация.
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Единый конверт ответа сервера `{success, data, error}`.
pub struct ApiResponse<T> {
    /// Успешен ли запрос.
    pub success: bool,
    /// Полезная нагрузка.
    pub data: Option<T>,
    /// Сообщение об ошибке.
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Успешный конверт с данными.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Конверт с ошибкой.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Проверяет флаг `success`; `data` может отсутствовать.
    pub fn into_result(self) -> ApiResult<Option<T>> {
        if self.success {
            return Ok(self.data);
        }
        let message = self
            .error
            .filter(|error| !error.trim().is_empty())
            .unwrap_or_else(|| messages::UNEXPECTED_ERROR.to_string());
        Err(ApiError::Http {
            status: status::OK,
            message,
            response: None,
        })
    }

    /// Как [`ApiResponse::into_result`], но требует наличия `data`.
    pub fn into_data(self) -> ApiResult<T> {
        self.into_result()?.ok_or_else(|| ApiError::Http {
            status: status::OK,
            message: "response has no data".to_string(),
            response: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Параметры запроса списка постов. В строку запроса они попадают через
/// [`ListParams::query_pairs`], отсутствующие параметры пропускаются.
pub struct ListParams {
    /// Номер страницы.
    pub page: Option<u32>,
    /// Размер страницы.
    pub limit: Option<u32>,
    /// Поисковая строка.
    pub search: Option<String>,
}

impl ListParams {
    /// Параметры для конкретной страницы.
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            search: None,
        }
    }

    /// Добавляет поиск; пустая строка поиска не передаётся.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    /// Пары `ключ=значение` для строки запроса.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pagination_uses_camel_case_on_the_wire() {
        let raw = json!({
            "currentPage": 2,
            "totalPages": 5,
            "totalItems": 27,
            "hasNextPage": true,
            "hasPrevPage": true
        });

        let pagination: Pagination = serde_json::from_value(raw).expect("pagination must parse");
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total_items, 27);
        assert!(pagination.has_next_page);
    }

    #[test]
    fn envelope_accepts_missing_data_and_error() {
        let resp: ApiResponse<PostsPage> =
            serde_json::from_value(json!({"success": false})).expect("envelope must parse");
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn into_data_rejects_unsuccessful_envelopes() {
        let err = ApiResponse::<Post>::failure("title taken")
            .into_data()
            .expect_err("failure envelope must be an error");
        assert_eq!(err.message(), "title taken");

        let err = ApiResponse::<Post> {
            success: true,
            data: None,
            error: None,
        }
        .into_data()
        .expect_err("missing data must be an error");
        assert_eq!(err.status(), 200);
    }

    #[test]
    fn into_result_allows_empty_data() {
        let resp = ApiResponse::<serde_json::Value> {
            success: true,
            data: None,
            error: None,
        };
        assert_eq!(resp.into_result().expect("success"), None);
    }

    #[test]
    fn post_without_timestamps_parses() {
        let post: Post =
            serde_json::from_value(json!({"id": 3, "title": "T", "body": "B", "user_id": 1}))
                .expect("post must parse");
        assert_eq!(post.id, 3);
        assert!(post.created_at.is_none());
    }

    #[test]
    fn query_pairs_skip_absent_and_empty_values() {
        assert!(ListParams::default().query_pairs().is_empty());

        let params = ListParams::page(2, 6).with_search("");
        assert_eq!(
            params.query_pairs(),
            vec![("page", "2".to_string()), ("limit", "6".to_string())]
        );

        let params = ListParams {
            search: Some("rust".to_string()),
            ..ListParams::default()
        };
        assert_eq!(params.query_pairs(), vec![("search", "rust".to_string())]);
    }

    #[test]
    fn after_removal_recomputes_totals() {
        let pagination = Pagination {
            current_page: 2,
            total_pages: 3,
            total_items: 13,
            has_next_page: true,
            has_prev_page: true,
        };

        let adjusted = pagination.after_removal(6);
        assert_eq!(adjusted.total_items, 12);
        assert_eq!(adjusted.total_pages, 2);
        assert!(!adjusted.has_next_page);
        assert!(adjusted.has_prev_page);
    }

    #[test]
    fn after_removal_never_underflows() {
        let adjusted = Pagination::default().after_removal(6);
        assert_eq!(adjusted.total_items, 0);
        assert_eq!(adjusted.total_pages, 0);
    }
}
