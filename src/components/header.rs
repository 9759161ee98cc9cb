//! Header Component
//!
//! Logo, section navigation, theme toggle and admin link. Becomes sticky once
//! the page scrolls past the hero.

use leptos::prelude::*;
use leptos_reveal::{scroll_to, scroll_y, use_window_listener};
use site_core::admin::AUTH_PATH;
use site_core::navigation::{HeaderState, Section};

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let header = RwSignal::new(HeaderState::default());

    use_window_listener("scroll", move |_| {
        let mut next = header.get_untracked();
        next.on_scroll(scroll_y());
        if next != header.get_untracked() {
            header.set(next);
        }
    });

    let go = move |section: Section| {
        scroll_to(section);
        header.update(|h| h.close_menu());
    };

    let nav_buttons = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button class=class on:click=move |_| go(section)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || if header.get().sticky { "site-header sticky" } else { "site-header" }>
            <div class="container-custom">
                <div class="header-bar">
                    <button class="logo" on:click=move |_| go(Section::Hero)>"ProCorp"</button>

                    <nav class="desktop-nav">{nav_buttons("nav-link")}</nav>

                    <div class="header-actions">
                        <button
                            class="icon-button"
                            aria-label="Toggle theme"
                            on:click=move |_| ctx.toggle_dark_mode()
                        >
                            {move || if ctx.dark_mode.get() { "☀" } else { "☾" }}
                        </button>
                        <a href=AUTH_PATH class="admin-link">"Admin"</a>
                        <button
                            class="icon-button mobile-only"
                            aria-label="Toggle menu"
                            on:click=move |_| header.update(|h| h.toggle_menu())
                        >
                            {move || if header.get().menu_open { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                // Mobile Navigation
                <div class=move || if header.get().menu_open { "mobile-nav open" } else { "mobile-nav" }>
                    <nav>
                        {nav_buttons("mobile-link")}
                        <a href=AUTH_PATH class="mobile-link">"Admin"</a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
