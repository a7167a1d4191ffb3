//! スクロール進捗バーと「トップへ戻る」ボタン

use case_archive_common::navigation::{back_to_top_visible, scroll_progress};
use leptos::ev;
use leptos::prelude::*;

use crate::dom;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (progress, set_progress) = signal(0.0f64);

    let handle = window_event_listener(ev::scroll, move |_| {
        let (top, height, client) = dom::scroll_metrics();
        set_progress.set(scroll_progress(top, height, client));
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="progress-container">
            <div
                id="progress-bar"
                class="progress-fill"
                style=move || format!("width: {}%", progress.get())
            />
        </div>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let (top, _, _) = dom::scroll_metrics();
        set_visible.set(back_to_top_visible(top));
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <button id="backToTop" class="back-to-top" on:click=move |_| dom::scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
