//! Клиентская валидация и нормализация ввода.
//!
//! Сервер проверяет данные сам; здесь только быстрые проверки перед
//! отправкой формы. `None` означает, что значение не передано или не строка.

use crate::constants::{limits, messages, pagination};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Результат проверки полей поста.
pub struct ValidationResult {
    /// `true`, если ошибок нет.
    pub is_valid: bool,
    /// Ошибки в порядке: заголовок, текст, пользователь.
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Нормализованные параметры пагинации.
pub struct PaginationParams {
    /// Страница, не меньше 1.
    pub page: u32,
    /// Размер страницы в диапазоне `[1, 100]`.
    pub limit: u32,
}

/// Проверяет поля нового поста. Ошибки накапливаются.
pub fn validate_post_data(
    title: Option<&str>,
    body: Option<&str>,
    user_id: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();

    let checks = [
        check_text(
            title,
            limits::TITLE_MAX_LENGTH,
            messages::TITLE_REQUIRED,
            messages::TITLE_TOO_LONG,
        ),
        check_text(
            body,
            limits::BODY_MAX_LENGTH,
            messages::BODY_REQUIRED,
            messages::BODY_TOO_LONG,
        ),
    ];
    for check in checks {
        if let Err(message) = check {
            errors.push(message.to_string());
        }
    }
    if !user_id.is_some_and(|id| id >= limits::MIN_USER_ID) {
        errors.push(messages::USER_ID_INVALID.to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn check_text(
    value: Option<&str>,
    max_len: usize,
    required: &'static str,
    too_long: &'static str,
) -> Result<(), &'static str> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(required);
    }
    if value.chars().count() > max_len {
        return Err(too_long);
    }
    Ok(())
}

/// Обрезает пробелы по краям; отсутствующее значение даёт пустую строку.
pub fn sanitize_input(input: Option<&str>) -> String {
    input.map(str::trim).unwrap_or_default().to_string()
}

/// Нормализует поисковый запрос: пробелы по краям и не больше 100 символов.
pub fn validate_search_term(term: Option<&str>) -> String {
    term.map(str::trim)
        .unwrap_or_default()
        .chars()
        .take(limits::SEARCH_MAX_LENGTH)
        .collect()
}

/// Приводит сырые параметры пагинации к числам.
///
/// Нечисловое значение или ноль заменяются значением по умолчанию; страница
/// не меньше 1, размер страницы ограничен `[1, 100]`.
pub fn validate_pagination_params(page: Option<&str>, limit: Option<&str>) -> PaginationParams {
    let page = match page.and_then(parse_leading_int).filter(|value| *value != 0) {
        Some(value) => clamp_to_u32(value, 1, u32::MAX),
        None => pagination::DEFAULT_PAGE,
    };

    let limit = match limit.and_then(parse_leading_int).filter(|value| *value != 0) {
        Some(value) => clamp_to_u32(value, pagination::MIN_LIMIT, pagination::MAX_LIMIT),
        None => pagination::DEFAULT_LIMIT,
    };

    PaginationParams { page, limit }
}

fn clamp_to_u32(value: i64, min: u32, max: u32) -> u32 {
    let clamped = value.clamp(i64::from(min), i64::from(max));
    u32::try_from(clamped).unwrap_or(max)
}

/// Разбирает целое в начале строки: `"12abc"` → 12, `"-5"` → -5, `"3.7"` → 3.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits: Vec<i64> = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0_i64, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    Some(if negative { -magnitude } else { magnitude })
}
