//! DOM操作の小さなヘルパー

use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use leptos::prelude::{document, window};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

/// モバイル表示に切り替える幅（px）
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// メニューやオーバーレイ表示中は背面をスクロールさせない
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

/// (scrollTop, scrollHeight, clientHeight)
pub fn scroll_metrics() -> (f64, f64, f64) {
    let scroll_top = window().scroll_y().unwrap_or(0.0);
    match document().document_element() {
        Some(root) => (
            scroll_top,
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        ),
        None => (scroll_top, 0.0, 0.0),
    }
}

pub fn is_mobile_viewport() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w < MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// `id` の要素までスムーズスクロール（見つかればtrue）
pub fn scroll_to_anchor(id: &str) -> bool {
    match document().get_element_by_id(id) {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

pub fn navigate(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        gloo::console::error!(format!("navigation failed: {:?}", e));
    }
}

/// コピーとテキスト選択を無効化する（ページが生きている間ずっと）
pub fn block_copy_and_selection() {
    let document = document();
    for event in ["copy", "selectstart"] {
        EventListener::new_with_options(
            &document,
            event,
            EventListenerOptions::enable_prevent_default(),
            |e| e.prevent_default(),
        )
        .forget();
    }
}

/// ページの読み込み完了後に一度だけ呼ぶ（完了済みなら即座に）
pub fn on_window_loaded(callback: impl FnOnce() + 'static) {
    if document().ready_state() == "complete" {
        callback();
        return;
    }
    EventListener::once(&window(), "load", move |_| callback()).forget();
}

/// 要素が `threshold` の割合以上見えたら一度だけ `callback` を呼ぶ
pub fn on_first_visible(element: &Element, threshold: f64, callback: impl FnOnce() + 'static) {
    let mut callback = Some(callback);
    let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if !visible {
                return;
            }
            observer.disconnect();
            if let Some(callback) = callback.take() {
                callback();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            closure.forget();
        }
        Err(e) => gloo::console::error!(format!("IntersectionObserver unavailable: {:?}", e)),
    }
}
