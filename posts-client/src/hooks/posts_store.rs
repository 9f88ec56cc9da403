use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::api::PostsApi;
use crate::constants::pagination::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
use crate::error::ApiResult;
use crate::hooks::api_call::{ApiCall, CallState, Listener};
use crate::models::{ListParams, NewPost, Pagination, Post, PostUpdate, PostsPage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Снимок состояния списка постов.
pub struct PostsSnapshot {
    /// Посты текущей страницы.
    pub posts: Vec<Post>,
    /// Пагинация последней загрузки.
    pub pagination: Option<Pagination>,
    /// Состояние последнего вызова.
    pub call: CallState,
}

struct ListState {
    posts: Vec<Post>,
    pagination: Option<Pagination>,
    last_limit: u32,
    fetch_generation: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            pagination: None,
            last_limit: DEFAULT_LIMIT,
            fetch_generation: 0,
        }
    }
}

fn lock_list(list: &Mutex<ListState>) -> MutexGuard<'_, ListState> {
    list.lock().unwrap_or_else(PoisonError::into_inner)
}

fn snapshot_of(list: &Mutex<ListState>, call: CallState) -> PostsSnapshot {
    let list = lock_list(list);
    PostsSnapshot {
        posts: list.posts.clone(),
        pagination: list.pagination.clone(),
        call,
    }
}

/// Состояние списка постов с пагинацией и CRUD-действиями поверх
/// [`PostsApi`].
pub struct PostsStore<A> {
    api: Arc<A>,
    call: ApiCall,
    list: Arc<Mutex<ListState>>,
    listener: Option<Listener<PostsSnapshot>>,
}

impl<A> Clone for PostsStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            call: self.call.clone(),
            list: Arc::clone(&self.list),
            listener: self.listener.clone(),
        }
    }
}

impl<A> fmt::Debug for PostsStore<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostsStore")
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl<A> PostsStore<A> {
    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener(&self.snapshot());
        }
    }

    /// Клиент API, через который работает хранилище.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Текущий снимок.
    pub fn snapshot(&self) -> PostsSnapshot {
        snapshot_of(&self.list, self.call.state())
    }

    /// Посты текущей страницы.
    pub fn posts(&self) -> Vec<Post> {
        lock_list(&self.list).posts.clone()
    }

    /// Пагинация последней успешной загрузки.
    pub fn pagination(&self) -> Option<Pagination> {
        lock_list(&self.list).pagination.clone()
    }

    /// Состояние последнего вызова.
    pub fn call_state(&self) -> CallState {
        self.call.state()
    }

    /// Сбрасывает сообщение об ошибке.
    pub fn clear_error(&self) {
        self.call.clear_error();
    }
}

impl<A: PostsApi> PostsStore<A> {
    /// Создаёт хранилище без подписчика.
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            call: ApiCall::new(),
            list: Arc::default(),
            listener: None,
        }
    }

    /// Создаёт хранилище, которое отдаёт подписчику снимок после каждого
    /// изменения списка или состояния вызова.
    pub fn with_listener(api: A, listener: impl Fn(&PostsSnapshot) + Send + Sync + 'static) -> Self {
        let listener: Listener<PostsSnapshot> = Arc::new(listener);
        let list: Arc<Mutex<ListState>> = Arc::default();

        let call = ApiCall::with_listener({
            let list = Arc::clone(&list);
            let listener = Arc::clone(&listener);
            move |call: &CallState| listener(&snapshot_of(&list, call.clone()))
        });

        Self {
            api: Arc::new(api),
            call,
            list,
            listener: Some(listener),
        }
    }

    /// Загружает страницу постов и заменяет ею локальный список.
    ///
    /// При ошибке прежний список остаётся. Ответ на запрос, после которого
    /// уже начата новая загрузка, не применяется.
    pub async fn fetch_posts(&self, params: ListParams) -> ApiResult<PostsPage> {
        let generation = {
            let mut list = lock_list(&self.list);
            list.fetch_generation += 1;
            list.fetch_generation
        };

        // Сервер ограничивает limit тем же диапазоном.
        let limit = params
            .limit
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(MIN_LIMIT, MAX_LIMIT);
        let api = Arc::clone(&self.api);
        let page = self
            .call
            .execute(async move { api.get_all(&params).await?.into_data() })
            .await?;

        {
            let mut list = lock_list(&self.list);
            if list.fetch_generation != generation {
                debug!(generation, latest = list.fetch_generation, "dropping stale posts page");
                return Ok(page);
            }
            list.posts = page.posts.clone();
            list.pagination = Some(page.pagination.clone());
            list.last_limit = limit;
        }
        self.notify();

        Ok(page)
    }

    /// Создаёт пост. Локальный список не меняется.
    pub async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        let api = Arc::clone(&self.api);
        self.call
            .execute(async move { api.create(post).await?.into_data() })
            .await
    }

    /// Обновляет пост. Локальный список не меняется.
    pub async fn update_post(&self, id: i64, update: &PostUpdate) -> ApiResult<Post> {
        let api = Arc::clone(&self.api);
        self.call
            .execute(async move { api.update(id, update).await?.into_data() })
            .await
    }

    /// Удаляет пост и убирает его из локального списка, пересчитывая итоги
    /// пагинации.
    ///
    /// Загрузки, начатые до удаления, после него уже не применяются: их
    /// страница ещё содержит удалённый пост.
    pub async fn delete_post(&self, id: i64) -> ApiResult<()> {
        let api = Arc::clone(&self.api);
        self.call
            .execute(async move { api.delete(id).await?.into_result().map(|_| ()) })
            .await?;

        let removed = {
            let mut list = lock_list(&self.list);
            list.fetch_generation += 1;
            let before = list.posts.len();
            list.posts.retain(|post| post.id != id);
            let removed = list.posts.len() != before;
            if removed {
                let limit = list.last_limit;
                list.pagination = list.pagination.as_ref().map(|p| p.after_removal(limit));
            }
            removed
        };

        if removed {
            self.notify();
        } else {
            warn!(id, "deleted post was not in the local list");
        }
        Ok(())
    }
}
