//! Подготовка данных формы создания поста.

use posts_client::NewPost;
use posts_client::constants::limits::TITLE_MAX_LENGTH;
use posts_client::validation::{sanitize_input, validate_post_data};

/// Значение поля user_id в пустой форме.
pub(crate) const DEFAULT_USER_ID: &str = "1";

/// Разбирает поле user_id; нечисловое значение считается отсутствующим.
pub(crate) fn parse_user_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Проверяет поля формы и собирает очищенные данные для запроса.
pub(crate) fn prepare_new_post(title: &str, body: &str, user_id: &str) -> Result<NewPost, Vec<String>> {
    let user_id = parse_user_id(user_id);
    let check = validate_post_data(Some(title), Some(body), user_id);
    if !check.is_valid {
        return Err(check.errors);
    }

    Ok(NewPost {
        title: sanitize_input(Some(title)),
        body: sanitize_input(Some(body)),
        user_id: user_id.unwrap_or_default(),
    })
}

/// Счётчик символов заголовка, например `12/255`.
pub(crate) fn title_counter(title: &str) -> String {
    format!("{}/{}", title.chars().count(), TITLE_MAX_LENGTH)
}
