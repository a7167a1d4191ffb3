//! 事件カードのグリッド

use case_archive_common::{Case, CaseCatalog};
use leptos::prelude::*;

use crate::app::LoadState;

/// カードごとの表示開始の遅れ（秒）
pub fn grid_card_delay(index: usize) -> f64 {
    index as f64 * 0.08
}

pub fn card_animation_style(delay_seconds: f64) -> String {
    format!(
        "animation: slideInUp 0.6s ease-out backwards; animation-delay: {}s;",
        delay_seconds
    )
}

#[component]
pub fn CaseGrid<F>(
    catalog: RwSignal<CaseCatalog>,
    load_state: RwSignal<LoadState>,
    on_retry: F,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let visible = move || {
        catalog.with(|c| {
            c.visible_cases()
                .into_iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let has_loaded = move || catalog.with(|c| c.has_loaded());
    let no_results = move || has_loaded() && catalog.with(|c| c.visible_cases().is_empty());

    let error_message = move || match load_state.get() {
        LoadState::Failed(message) => Some(message),
        _ => None,
    };

    view! {
        {move || error_message().map(|message| view! {
            <div class="load-error">
                <p>"Failed to load the case archive: "{message}</p>
                <button class="btn btn-secondary" on:click=move |_| on_retry()>
                    "Retry"
                </button>
            </div>
        })}

        <Show when=move || !has_loaded() && load_state.get() == LoadState::Loading>
            <p class="text-muted">"Loading cases..."</p>
        </Show>

        <div id="casesGrid" class="cases-grid">
            <For
                each=visible
                key=|(index, case)| (*index, case.name.clone())
                children=move |(index, case)| view! { <CaseCard case=case index=index /> }
            />
        </div>

        <Show when=no_results>
            <div id="noResults" class="no-results">
                <p>"No cases match your search."</p>
            </div>
        </Show>
    }
}

#[component]
fn CaseCard(case: Case, index: usize) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);

    view! {
        <a
            href=case.link.clone()
            class="case-card"
            style=card_animation_style(grid_card_delay(index))
        >
            <div class="case-image-wrapper" class:revealed=move || revealed.get()>
                <div class="exclusive-overlay">
                    <div class="exclusive-badge">"Exclusive Content"</div>
                    <button
                        class="reveal-btn"
                        on:click=move |ev| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            set_revealed.set(true);
                        }
                    >
                        "View Evidence"
                    </button>
                </div>
                <img
                    src=case.image.clone()
                    class="exclusive-blur"
                    alt=case.name.clone()
                    loading="lazy"
                />
            </div>

            <div class="case-body">
                <div class="case-tags">
                    <span class="tag tag-year">{case.year.clone()}</span>
                    <span class="tag tag-region">{case.region.clone()}</span>
                </div>
                <h3>{case.name.clone()}</h3>
                <p class="case-description">{case.description.clone()}</p>
                <span class="case-link">"Read Full Case"</span>
            </div>
        </a>
    }
}
