//! Public Marketing Page
//!
//! All sections on one page, with arrow-key section navigation.

use leptos::prelude::*;
use leptos_reveal::{navigate_by_key, use_window_listener};
use site_core::navigation::NavKey;
use wasm_bindgen::JsCast;

use crate::components::{About, Footer, Header, Hero, News, Portfolio, Preloader, Services};

#[component]
pub fn IndexPage() -> impl IntoView {
    let main_ref = NodeRef::<leptos::html::Main>::new();

    use_window_listener("keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };

        // First Tab from an unfocused page lands on the main content
        if ev.key() == "Tab" && !ev.shift_key() && body_has_focus() {
            if let Some(main) = main_ref.get_untracked() {
                ev.prevent_default();
                let _ = main.focus();
            }
            return;
        }

        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        if let Some(section) = navigate_by_key(key) {
            ev.prevent_default();
            log::debug!("[nav] {:?} -> {}", key, section.id());
        }
    });

    view! {
        <Preloader />

        <a href="#main-content" class="skip-link">"Skip to main content"</a>

        <div class="page">
            <Header />
            <main id="main-content" tabindex="-1" node_ref=main_ref>
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <News />
            </main>
            <Footer />
        </div>
    }
}

fn body_has_focus() -> bool {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.active_element())
        .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("body"))
}
