use leptos::prelude::*;
use posts_client::{Pagination, Post, PostsSnapshot, PostsStore};

use crate::api::GlooClient;

/// Сигналы, в которые `PostsStore` публикует своё состояние.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PostsState {
    pub(crate) posts: RwSignal<Vec<Post>>,
    pub(crate) pagination: RwSignal<Option<Pagination>>,
    pub(crate) loading: RwSignal<bool>,
    pub(crate) error: RwSignal<Option<String>>,
    pub(crate) is_network_error: RwSignal<bool>,
}

impl PostsState {
    pub(crate) fn new() -> Self {
        Self {
            posts: RwSignal::new(Vec::new()),
            pagination: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            is_network_error: RwSignal::new(false),
        }
    }

    /// Создаёт хранилище, каждое изменение которого попадает в эти сигналы.
    pub(crate) fn store(self, client: GlooClient) -> PostsStore<GlooClient> {
        PostsStore::with_listener(client, move |snapshot| self.apply(snapshot))
    }

    // Ответ может прийти после того, как компонент размонтирован: запись в
    // удалённый сигнал молча игнорируется.
    fn apply(&self, snapshot: &PostsSnapshot) {
        let _ = self.posts.try_set(snapshot.posts.clone());
        let _ = self.pagination.try_set(snapshot.pagination.clone());
        let _ = self.loading.try_set(snapshot.call.loading);
        let _ = self.error.try_set(snapshot.call.error.clone());
        let _ = self.is_network_error.try_set(snapshot.call.is_network_error);
    }
}
