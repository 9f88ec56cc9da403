use leptos::prelude::*;
use posts_client::pagination::{PageItem, page_items};

/// Строка пагинации: «назад», номера страниц с многоточиями, «вперёд».
///
/// Не показывается, если страница одна.
#[component]
pub(crate) fn PaginationBar(
    page: RwSignal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let has_prev = move || page.get() > 1;
    let has_next = move || page.get() < total_pages.get();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination">
                <button
                    disabled=move || disabled.get() || !has_prev()
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "« Prev"
                </button>
                {move || {
                    page_items(page.get(), total_pages.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(number) => view! {
                                <button
                                    class="page-number"
                                    class:active=move || page.get() == number
                                    disabled=move || disabled.get()
                                    on:click=move |_| page.set(number)
                                >
                                    {number}
                                </button>
                            }
                            .into_any(),
                            PageItem::Ellipsis => view! { <span class="ellipsis">"…"</span> }.into_any(),
                        })
                        .collect_view()
                }}
                <button
                    disabled=move || disabled.get() || !has_next()
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next »"
                </button>
            </nav>
        </Show>
    }
}
