use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use posts_client::constants::{SUCCESS_BANNER_MS, messages};
use posts_client::{Post, PostsApi};

use crate::api::{self, GlooClient};
use crate::banner::SuccessBanner;
use crate::components::add_post_form::AddPostForm;
use crate::components::post_list::PostList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Posts,
    AddPost,
}

fn check_health(client: GlooClient, online: RwSignal<Option<bool>>) {
    spawn_local(async move {
        let healthy = client
            .check_health()
            .await
            .and_then(|resp| resp.into_result())
            .is_ok();
        online.set(Some(healthy));
    });
}

#[component]
pub fn App() -> impl IntoView {
    let client = GlooClient::new(api::client_config());

    let active_tab = RwSignal::new(Tab::Posts);
    // Увеличивается после создания поста, список перезагружается.
    let refresh = RwSignal::new(0_u32);
    let api_online = RwSignal::new(None::<bool>);

    check_health(client.clone(), api_online);

    // Баннер живёт здесь: форма размонтируется при переключении на список.
    let banner = RwSignal::new(SuccessBanner::default());

    let on_post_added = Callback::new(move |_post: Post| {
        if let Some(token) = banner.try_update(|b| b.show()) {
            set_timeout(
                move || {
                    let _ = banner.try_update(|b| b.hide(token));
                },
                Duration::from_millis(SUCCESS_BANNER_MS),
            );
        }
        refresh.update(|n| *n += 1);
        active_tab.set(Tab::Posts);
    });

    let api_status = move || match api_online.get() {
        None => "checking...",
        Some(true) => "online",
        Some(false) => "offline",
    };

    view! {
        <main class="page">
            <section class="container">
                <header>
                    <h1>"Posts Dashboard"</h1>
                    <p class="api-status">"API: " {api_status}</p>
                </header>

                <Show when=move || banner.with(SuccessBanner::is_visible)>
                    <div class="success-banner">{messages::POST_CREATED}</div>
                </Show>

                <nav class="tabs">
                    <button
                        class:active=move || active_tab.get() == Tab::Posts
                        on:click=move |_| active_tab.set(Tab::Posts)
                    >
                        "All posts"
                    </button>
                    <button
                        class:active=move || active_tab.get() == Tab::AddPost
                        on:click=move |_| active_tab.set(Tab::AddPost)
                    >
                        "Add post"
                    </button>
                </nav>

                {move || match active_tab.get() {
                    Tab::Posts => {
                        view! { <PostList client=client.clone() refresh=refresh.read_only() /> }
                            .into_any()
                    }
                    Tab::AddPost => {
                        view! { <AddPostForm client=client.clone() on_post_added=on_post_added /> }
                            .into_any()
                    }
                }}
            </section>
        </main>
    }
}
