//! 注目事件（先頭6件）

use case_archive_common::{CaseCatalog, DEFAULT_FEATURED_COUNT};
use leptos::prelude::*;

use super::case_grid::card_animation_style;

pub fn featured_card_delay(index: usize) -> f64 {
    (index + 1) as f64 * 0.1
}

#[component]
pub fn FeaturedCases(catalog: RwSignal<CaseCatalog>) -> impl IntoView {
    let featured = move || {
        catalog.with(|c| {
            c.featured(DEFAULT_FEATURED_COUNT)
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="featuredCasesGrid" class="featured-grid">
            <For
                each=featured
                key=|(index, case)| (*index, case.name.clone())
                children=move |(index, case)| {
                    view! {
                        <a
                            href=case.link.clone()
                            class="case-card featured-card"
                            style=card_animation_style(featured_card_delay(index))
                        >
                            <img src=case.image.clone() alt=case.name.clone() loading="lazy" />
                            <div class="featured-content">
                                <span class="tag">{format!("{} • {}", case.year, case.location)}</span>
                                <h3>{case.name.clone()}</h3>
                                <p class="case-description">{case.description.clone()}</p>
                                <span class="case-link">"Learn More"</span>
                            </div>
                        </a>
                    }
                }
            />
        </div>
    }
}
