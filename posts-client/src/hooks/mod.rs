//! Состояние асинхронных вызовов и списка постов, не привязанное к
//! конкретному UI-фреймворку. Изменения публикуются подписчику, который
//! может переложить их в реактивное состояние.

mod api_call;
mod posts_store;

pub use api_call::{ApiCall, CallState, Listener};
pub use posts_store::{PostsSnapshot, PostsStore};
