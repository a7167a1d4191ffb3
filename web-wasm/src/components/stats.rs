//! 統計カウンタ

use case_archive_common::counter::COUNTER_VISIBLE_THRESHOLD;
use case_archive_common::{CaseCatalog, CounterAnimation, CounterSuffix};
use leptos::html::Div;
use leptos::prelude::*;

use crate::dom;

/// 1フレーム分進めて次のフレームを予約する（破棄済みなら止める）
fn run_counter(mut animation: CounterAnimation, suffix: CounterSuffix, set_text: WriteSignal<String>) {
    if let Some(value) = animation.next() {
        if set_text.try_set(suffix.format(value)).is_some() {
            return;
        }
        request_animation_frame(move || run_counter(animation, suffix, set_text));
    }
}

#[component]
fn StatCounter(target: u64, suffix: CounterSuffix, label: &'static str) -> impl IntoView {
    let (text, set_text) = signal(suffix.format(0));
    let node = NodeRef::<Div>::new();

    // 画面に入ったときに一度だけ数え上げる
    Effect::new(move |_| {
        if let Some(element) = node.get() {
            dom::on_first_visible(&element, COUNTER_VISIBLE_THRESHOLD, move || {
                run_counter(CounterAnimation::new(target), suffix, set_text);
            });
        }
    });

    view! {
        <div class="stat" node_ref=node>
            <span class="stat-number">{move || text.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn StatsSection(catalog: RwSignal<CaseCatalog>) -> impl IntoView {
    // フィルタ操作では再計算されないようMemoで区切る
    let stats = Memo::new(move |_| catalog.with(|c| c.stats()));

    view! {
        <section class="stats-section">
            {move || {
                let stats = stats.get();
                view! {
                    <StatCounter target=stats.total_cases as u64 suffix=CounterSuffix::Plus label="Cases Archived" />
                    <StatCounter target=stats.eras as u64 suffix=CounterSuffix::Plus label="Eras Covered" />
                    <StatCounter target=stats.regions as u64 suffix=CounterSuffix::Plus label="Regions" />
                    <StatCounter target=24 suffix=CounterSuffix::OutOfSeven label="Archive Access" />
                }
            }}
        </section>
    }
}
