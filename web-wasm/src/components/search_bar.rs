//! 検索欄コンポーネント

use case_archive_common::CaseCatalog;
use leptos::prelude::*;

#[component]
pub fn SearchBar(catalog: RwSignal<CaseCatalog>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                id="searchInput"
                type="search"
                placeholder="Search by name, location or year..."
                prop:value=move || catalog.with(|c| c.filters().search_term().to_string())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    catalog.update(|c| c.set_search(term));
                }
            />
        </div>
    }
}
