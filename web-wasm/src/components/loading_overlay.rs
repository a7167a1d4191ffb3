//! ページ遷移時のローディングオーバーレイ
//!
//! 同一ホストのリンクをクリックすると、ランダムな待ち時間のあいだ
//! オーバーレイを出してから遷移する。ページ内リンクはスムーズスクロール。

use std::time::Duration;

use case_archive_common::navigation::{
    anchor_target, overlay_delay_ms, pick_loading_message, LinkKind, LOADING_MESSAGES,
    OVERLAY_HIDE_DELAY_MS,
};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, MouseEvent};

use crate::app::MenuState;
use crate::dom;

/// クリック位置から一番近い `<a>` を探す
fn clicked_anchor(ev: &MouseEvent) -> Option<HtmlAnchorElement> {
    ev.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("a")
        .ok()??
        .dyn_into::<HtmlAnchorElement>()
        .ok()
}

/// メニューやボタンの外側をクリックしたか
fn clicked_outside_menu(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("#mobileMenu, #mobileMenuButton").ok().flatten())
        .is_none()
}

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let menu = expect_context::<MenuState>();
    let (visible, set_visible) = signal(true);
    let (message, set_message) = signal(LOADING_MESSAGES[0].to_string());
    let (bar_style, set_bar_style) = signal("width: 0%;".to_string());

    // ページの読み込みが終わってから消す
    dom::set_body_scroll_locked(true);
    dom::on_window_loaded(move || {
        set_timeout(
            move || {
                set_visible.set(false);
                dom::set_body_scroll_locked(false);
            },
            Duration::from_millis(u64::from(OVERLAY_HIDE_DELAY_MS)),
        );
    });

    let handle = window_event_listener(ev::click, move |ev| {
        if menu.is_open() && clicked_outside_menu(&ev) {
            menu.close();
        }

        let Some(anchor) = clicked_anchor(&ev) else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if !anchor.target().is_empty() || ev.ctrl_key() || ev.shift_key() || ev.meta_key() {
            return;
        }

        let current_host = window().location().hostname().unwrap_or_default();
        match LinkKind::classify(&href, &anchor.hostname(), &current_host) {
            LinkKind::Anchor => {
                if let Some(id) = anchor_target(&href) {
                    ev.prevent_default();
                    if dom::scroll_to_anchor(id) {
                        menu.close();
                    }
                }
            }
            LinkKind::Internal => {
                ev.prevent_default();

                set_message.set(pick_loading_message(js_sys::Math::random()).to_string());
                set_visible.set(true);
                dom::set_body_scroll_locked(true);

                let delay = overlay_delay_ms(js_sys::Math::random());
                set_bar_style.set("width: 0%;".to_string());
                set_timeout(
                    move || {
                        set_bar_style.set(format!("width: 100%; transition: width {}ms linear;", delay));
                    },
                    Duration::from_millis(50),
                );

                let target = anchor.href();
                set_timeout(move || dom::navigate(&target), Duration::from_millis(u64::from(delay)));
            }
            LinkKind::Special | LinkKind::External => {}
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div id="loadingOverlay" class="loading-overlay" class:show=move || visible.get()>
            <div class="spinner" />
            <p class="loading-status">{move || message.get()}</p>
            <div class="loading-progress">
                <div class="loading-progress-bar" style=move || bar_style.get() />
            </div>
        </div>
    }
}
