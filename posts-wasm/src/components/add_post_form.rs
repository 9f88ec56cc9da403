use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use posts_client::Post;

use crate::api::GlooClient;
use crate::form::{DEFAULT_USER_ID, prepare_new_post, title_counter};
use crate::state::PostsState;

/// Форма создания поста. После успешного создания очищается и вызывает
/// `on_post_added`; сообщение об успехе показывает родитель.
#[component]
pub(crate) fn AddPostForm(client: GlooClient, on_post_added: Callback<Post>) -> impl IntoView {
    let state = PostsState::new();
    let store = state.store(client);

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let user_id = RwSignal::new(DEFAULT_USER_ID.to_string());
    let validation_errors = RwSignal::new(Vec::<String>::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.clear_error();

        let payload = match prepare_new_post(&title.get(), &body.get(), &user_id.get()) {
            Ok(payload) => payload,
            Err(errors) => {
                validation_errors.set(errors);
                return;
            }
        };
        validation_errors.set(Vec::new());

        let store = store.clone();
        spawn_local(async move {
            let Ok(created) = store.create_post(&payload).await else {
                return;
            };

            title.set(String::new());
            body.set(String::new());
            user_id.set(DEFAULT_USER_ID.to_string());
            on_post_added.run(created);
        });
    };

    view! {
        <section class="add-post">
            <h2>"Add post"</h2>

            <Show when=move || state.error.get().is_some()>
                <div class="error-banner" class:network=move || state.is_network_error.get()>
                    {move || state.error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || !validation_errors.get().is_empty()>
                <ul class="validation-errors">
                    {move || {
                        validation_errors
                            .get()
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>

            <form on:submit=on_submit>
                <label>
                    "Title"
                    <input
                        placeholder="Post title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <small>{move || title_counter(&title.get())}</small>
                </label>
                <label>
                    "Body"
                    <textarea
                        rows="6"
                        placeholder="What is on your mind?"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "User ID"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || user_id.get()
                        on:input=move |ev| user_id.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || state.loading.get()>
                    {move || if state.loading.get() { "Creating..." } else { "Create post" }}
                </button>
            </form>
        </section>
    }
}
