//! Статическая конфигурация клиента: адрес API по умолчанию, параметры
//! пагинации, лимиты валидации, тексты сообщений и HTTP-статусы.

/// Базовый URL API, если `POSTS_API_BASE_URL` не задан.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

/// Переменная окружения с базовым URL API.
pub const API_BASE_URL_ENV: &str = "POSTS_API_BASE_URL";

/// Переменная окружения с таймаутом запроса в секундах.
pub const API_TIMEOUT_ENV: &str = "POSTS_API_TIMEOUT_SECS";

/// Таймаут запроса по умолчанию (секунды).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Таймаут установки соединения (секунды).
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Параметры пагинации.
pub mod pagination {
    /// Номер первой страницы.
    pub const DEFAULT_PAGE: u32 = 1;
    /// Размер страницы по умолчанию.
    pub const DEFAULT_LIMIT: u32 = 6;
    /// Минимальный размер страницы.
    pub const MIN_LIMIT: u32 = 1;
    /// Максимальный размер страницы.
    pub const MAX_LIMIT: u32 = 100;
    /// Сколько соседних страниц показывать вокруг текущей.
    pub const PAGE_WINDOW: u32 = 2;
}

/// Лимиты валидации полей поста и поиска.
pub mod limits {
    /// Максимальная длина заголовка (символы).
    pub const TITLE_MAX_LENGTH: usize = 255;
    /// Максимальная длина текста поста (символы).
    pub const BODY_MAX_LENGTH: usize = 10_000;
    /// Минимальный идентификатор пользователя.
    pub const MIN_USER_ID: i64 = 1;
    /// Максимальная длина поискового запроса (символы).
    pub const SEARCH_MAX_LENGTH: usize = 100;
}

/// Тексты сообщений для пользователя.
pub mod messages {
    pub const TITLE_REQUIRED: &str = "Title is required";
    pub const TITLE_TOO_LONG: &str = "Title must be 255 characters or less";
    pub const BODY_REQUIRED: &str = "Body is required";
    pub const BODY_TOO_LONG: &str = "Body must be 10000 characters or less";
    pub const USER_ID_INVALID: &str = "User ID is required and must be at least 1";

    pub const POST_ID_REQUIRED: &str = "Post ID is required";
    pub const POST_FIELDS_REQUIRED: &str = "Title, body, and user_id are required";
    pub const UPDATE_FIELDS_REQUIRED: &str = "Title and body are required";

    pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";
    pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

    pub const POST_CREATED: &str = "Post created successfully!";
    pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";
    pub const NO_POSTS: &str = "No posts found";
    pub const LOADING: &str = "Loading...";
}

/// HTTP-статусы, с которыми работает клиент.
pub mod status {
    /// Сетевая ошибка: ответа от сервера нет.
    pub const NETWORK_ERROR: u16 = 0;
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// Сколько миллисекунд показывается баннер об успешном создании поста.
pub const SUCCESS_BANNER_MS: u64 = 3_000;
