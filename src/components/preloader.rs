//! Preloader Component
//!
//! Full-screen brand overlay shown while the page settles.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const PRELOADER_MS: u32 = 2_000;

#[component]
pub fn Preloader() -> impl IntoView {
    let (loading, set_loading) = signal(true);

    // Cancelled if the page goes away first
    let timer = Timeout::new(PRELOADER_MS, move || {
        set_loading.try_set(false);
    });
    let _ = StoredValue::new_local(timer);

    view! {
        <Show when=move || loading.get()>
            <div class="preloader">
                <div class="preloader-inner">
                    <div class="preloader-logo">"ProCorp"</div>
                    <div class="preloader-dots">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                    <p>"Loading Excellence..."</p>
                </div>
            </div>
        </Show>
    }
}
