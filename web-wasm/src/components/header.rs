//! ヘッダーとモバイルメニュー

use leptos::ev;
use leptos::prelude::*;

use crate::app::MenuState;

/// ナビゲーションのリンク（表示名, href）
const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#top"),
    ("Featured", "#featured"),
    ("Archive", "#archive"),
    ("Contact", "mailto:tips@fatalpast.example"),
];

#[component]
pub fn Header() -> impl IntoView {
    let menu = expect_context::<MenuState>();

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu.is_open() {
            menu.close();
        }
    });
    on_cleanup(move || handle.remove());

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(label, href)| {
                view! {
                    <a href=href class="nav-link" on:click=move |_| menu.close()>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="header">
            <a href="#top" class="logo">"FatalPast"</a>
            <nav class="desktop-nav">{links()}</nav>

            <button
                id="mobileMenuButton"
                class="mobile-menu-button"
                on:click=move |ev| {
                    ev.stop_propagation();
                    menu.open();
                }
            >
                "☰"
            </button>
        </header>

        <div
            id="mobileBackdrop"
            class="mobile-backdrop"
            class:active=move || menu.0.get()
            on:click=move |ev| {
                ev.stop_propagation();
                menu.close();
            }
        />
        <div id="mobileMenu" class="mobile-menu" class:active=move || menu.0.get()>
            <button
                id="closeMobileMenu"
                class="close-mobile-menu"
                on:click=move |ev| {
                    ev.stop_propagation();
                    menu.close();
                }
            >
                "×"
            </button>
            <nav class="mobile-nav">{links()}</nav>
        </div>
    }
}
