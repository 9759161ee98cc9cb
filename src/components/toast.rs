//! Toast Host Component
//!
//! Renders the toasts queued on the app context.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|active| active.id
                children=move |active| {
                    let id = active.id;
                    let class = if active.toast.is_error() { "toast destructive" } else { "toast" };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            <div class="toast-title">{active.toast.title}</div>
                            <div class="toast-description">{active.toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
