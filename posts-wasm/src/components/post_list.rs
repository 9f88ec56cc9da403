use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use posts_client::constants::messages;
use posts_client::constants::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use posts_client::pagination::page_after_delete;
use posts_client::validation::validate_search_term;
use posts_client::{ListParams, Post};

use crate::api::GlooClient;
use crate::components::pagination_bar::PaginationBar;
use crate::state::PostsState;

fn created_label(post: &Post) -> String {
    // "2026-01-01T10:00:00Z" -> "2026-01-01"
    post.created_at
        .as_deref()
        .and_then(|created| created.get(..10))
        .map(|date| format!("Created {date}"))
        .unwrap_or_default()
}

#[component]
pub(crate) fn PostList(client: GlooClient, refresh: ReadSignal<u32>) -> impl IntoView {
    let state = PostsState::new();
    let store = state.store(client);

    let page = RwSignal::new(DEFAULT_PAGE);
    // Поиск применяется только по отправке формы.
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    Effect::new({
        let store = store.clone();
        move |_| {
            refresh.track();
            let params = ListParams::page(page.get(), DEFAULT_LIMIT).with_search(search.get());
            let store = store.clone();
            spawn_local(async move {
                let _ = store.fetch_posts(params).await;
            });
        }
    });

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        search.set(validate_search_term(Some(&search_input.get_untracked())));
        page.set(DEFAULT_PAGE);
    };

    let on_clear_search = move |_| {
        search_input.set(String::new());
        search.set(String::new());
        page.set(DEFAULT_PAGE);
    };

    let on_delete = Callback::new({
        let store = store.clone();
        move |post_id: i64| {
            let confirmed = window()
                .confirm_with_message(messages::CONFIRM_DELETE)
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let store = store.clone();
            spawn_local(async move {
                if store.delete_post(post_id).await.is_err() {
                    return;
                }

                let current = page.get_untracked();
                let next = page_after_delete(current, store.posts().len());
                if next != current {
                    page.set(next);
                    return;
                }
                let params =
                    ListParams::page(current, DEFAULT_LIMIT).with_search(search.get_untracked());
                let _ = store.fetch_posts(params).await;
            });
        }
    });

    let on_dismiss_error = {
        let store = store.clone();
        move |_| store.clear_error()
    };

    let total_pages = Signal::derive(move || {
        state
            .pagination
            .get()
            .map(|p| p.total_pages)
            .unwrap_or_default()
    });
    let summary = move || {
        state.pagination.get().map(|p| {
            format!(
                "Page {} of {} ({} posts)",
                p.current_page, p.total_pages, p.total_items
            )
        })
    };

    view! {
        <section class="post-list">
            <form class="search" on:submit=on_search>
                <input
                    placeholder="Search posts..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || state.loading.get()>
                    "Search"
                </button>
                <Show when=move || !search.get().is_empty() || !search_input.get().is_empty()>
                    <button type="button" on:click=on_clear_search>
                        "Clear"
                    </button>
                </Show>
            </form>

            <Show when=move || state.error.get().is_some()>
                <div class="error-banner" class:network=move || state.is_network_error.get()>
                    {move || state.error.get().unwrap_or_default()}
                    <button type="button" on:click=on_dismiss_error.clone()>
                        "×"
                    </button>
                </div>
            </Show>

            <Show when=move || state.loading.get()>
                <p class="loading">{messages::LOADING}</p>
            </Show>

            <Show when=move || {
                !state.loading.get() && state.error.get().is_none() && state.posts.get().is_empty()
            }>
                <p class="empty">{messages::NO_POSTS}</p>
            </Show>

            <p class="summary">{summary}</p>

            <div class="posts-grid">
                <For
                    each=move || state.posts.get()
                    key=|post| (post.id, post.updated_at.clone())
                    children=move |post| {
                        let post_id = post.id;
                        let created = created_label(&post);
                        view! {
                            <article class="post-card">
                                <h3>{post.title}</h3>
                                <p>{post.body}</p>
                                <footer>
                                    <span>"User " {post.user_id}</span>
                                    <span>{created}</span>
                                    <button
                                        class="danger"
                                        disabled=move || state.loading.get()
                                        on:click=move |_| on_delete.run(post_id)
                                    >
                                        "Delete"
                                    </button>
                                </footer>
                            </article>
                        }
                    }
                />
            </div>

            <PaginationBar page=page total_pages=total_pages disabled=state.loading />
        </section>
    }
}
