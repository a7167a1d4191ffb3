//! アクティブフィルタのバッジ表示

use case_archive_common::{CaseCatalog, Dimension};
use leptos::prelude::*;

/// バッジの色クラス
fn badge_class(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Era => "badge badge-era",
        Dimension::Type => "badge badge-type",
        Dimension::Region => "badge badge-region",
    }
}

#[component]
pub fn ActiveFilters(catalog: RwSignal<CaseCatalog>) -> impl IntoView {
    let active = move || {
        catalog.with(|c| {
            c.active_filter_summary()
                .into_iter()
                .map(|(dimension, value)| (dimension, value.to_string()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || catalog.with(|c| c.filters().has_active_filters())>
            <div id="activeFiltersDisplay" class="active-filters">
                <span class="active-filters-title">"Active filters:"</span>
                <div id="activeFiltersList" class="active-filters-list">
                    <For
                        each=active
                        key=|(dimension, value)| format!("{}={}", dimension, value)
                        children=move |(dimension, value)| {
                            view! {
                                <span class=badge_class(dimension)>
                                    <span>{dimension.icon()}" "{value}</span>
                                    <button
                                        class="badge-clear"
                                        title=format!("Clear {} filter", dimension.label())
                                        on:click=move |_| catalog.update(|c| c.clear_filter(dimension))
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
