//! フィルタボタンコンポーネント
//!
//! ボタンはデータ中のラベルから作る（先頭は "All"）。

use case_archive_common::{CaseCatalog, Dimension, ALL};
use leptos::prelude::*;

use crate::dom;

/// ボタンの表示名
pub fn button_label(value: &str) -> String {
    if value == ALL {
        "All".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn FilterBar(catalog: RwSignal<CaseCatalog>) -> impl IntoView {
    // モバイルでは折りたたみ
    let (filters_open, set_filters_open) = signal(false);

    let on_filter_selected = move || {
        if dom::is_mobile_viewport() {
            set_filters_open.set(false);
        }
    };

    view! {
        <div class="filter-bar">
            <button
                id="filterToggleBtn"
                class="filter-toggle"
                class:toggled=move || filters_open.get()
                on:click=move |_| set_filters_open.update(|open| *open = !*open)
            >
                "Filters"
            </button>

            <div id="filtersContainer" class="filters-container" class:open=move || filters_open.get()>
                {Dimension::ORDER
                    .into_iter()
                    .map(|dimension| {
                        view! {
                            <FilterGroup
                                catalog=catalog
                                dimension=dimension
                                on_selected=on_filter_selected
                            />
                        }
                    })
                    .collect_view()}

                <button
                    id="clearFiltersBtn"
                    class="btn btn-secondary"
                    on:click=move |_| catalog.update(|c| c.clear_all())
                >
                    "Clear Filters"
                </button>
            </div>
        </div>
    }
}

#[component]
fn FilterGroup<F>(
    catalog: RwSignal<CaseCatalog>,
    dimension: Dimension,
    on_selected: F,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let values = move || {
        catalog.with(|c| {
            std::iter::once(ALL.to_string())
                .chain(c.facet(dimension).labels().map(str::to_string))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="filter-group">
            <h4>{dimension.icon()}" "{dimension.label()}</h4>
            <div class="filter-buttons">
                <For
                    each=values
                    key=|value| value.clone()
                    children=move |value| {
                        let current = value.clone();
                        let is_active = move || {
                            catalog.with(|c| c.filters().get(dimension).as_str() == current)
                        };
                        let label = button_label(&value);
                        let data_value = value.clone();
                        view! {
                            <button
                                class="filter-btn"
                                class:active=is_active
                                data-filter=dimension.as_str()
                                data-value=data_value
                                on:click=move |_| {
                                    let value = value.clone();
                                    catalog.update(|c| c.set_filter(dimension, value));
                                    on_selected();
                                }
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
