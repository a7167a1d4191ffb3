//! メインアプリケーションコンポーネント

use case_archive_common::{CaseCatalog, CaseSource, LoadOutcome};
use gloo::console::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{FetchSource, CASES_URL};
use crate::components::{
    active_filters::ActiveFilters,
    case_grid::CaseGrid,
    featured::FeaturedCases,
    filter_bar::FilterBar,
    header::Header,
    loading_overlay::LoadingOverlay,
    scroll::{BackToTop, ScrollProgress},
    search_bar::SearchBar,
    stats::StatsSection,
};
use crate::dom;

/// 読み込み状態（カタログ本体とは別に持つ）
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// モバイルメニューの開閉（コンテキストで共有）
#[derive(Clone, Copy)]
pub struct MenuState(pub RwSignal<bool>);

impl MenuState {
    pub fn open(&self) {
        self.0.set(true);
        dom::set_body_scroll_locked(true);
    }

    pub fn close(&self) {
        self.0.set(false);
        dom::set_body_scroll_locked(false);
    }

    pub fn is_open(&self) -> bool {
        self.0.get_untracked()
    }
}

/// `cases.json` を読み込んでカタログに反映する
///
/// 複数回呼ばれた場合は最後の要求の応答だけが反映される。
fn load_cases(catalog: RwSignal<CaseCatalog>, load_state: RwSignal<LoadState>) {
    let Some(ticket) = catalog.try_update(|c| c.begin_load()) else {
        return;
    };
    load_state.set(LoadState::Loading);

    spawn_local(async move {
        let source = FetchSource::new(CASES_URL);
        let result = source.fetch_cases().await;

        match catalog.try_update(|c| c.finish_load(ticket, result)) {
            Some(Ok(LoadOutcome::Applied { count })) => {
                log!(format!("loaded {} cases from {}", count, source.describe()));
                load_state.set(LoadState::Ready);
            }
            Some(Ok(LoadOutcome::Stale)) | None => {}
            Some(Err(e)) => {
                error!(format!("Error loading cases: {}", e));
                load_state.set(LoadState::Failed(e.to_string()));
            }
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(CaseCatalog::new());
    let load_state = RwSignal::new(LoadState::Loading);
    let menu = MenuState(RwSignal::new(false));
    provide_context(menu);

    dom::block_copy_and_selection();
    load_cases(catalog, load_state);

    let on_retry = move || load_cases(catalog, load_state);

    view! {
        <LoadingOverlay />
        <ScrollProgress />
        <Header />

        <main id="top">
            <StatsSection catalog=catalog />

            <section id="featured" class="featured-section">
                <h2 class="section-title">"Featured Cases"</h2>
                <FeaturedCases catalog=catalog />
            </section>

            <section id="archive" class="archive-section">
                <h2 class="section-title">"Case Archive"</h2>
                <SearchBar catalog=catalog />
                <FilterBar catalog=catalog />
                <ActiveFilters catalog=catalog />
                <CaseGrid catalog=catalog load_state=load_state on_retry=on_retry />
            </section>
        </main>

        <BackToTop />
    }
}
