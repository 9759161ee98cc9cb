//! ProCorp Frontend App
//!
//! Root component: wires the backend, switches between the public page and
//! the admin dashboard by path, and hosts toasts.

use leptos::prelude::*;
use leptos_reveal::{current_path, set_root_class, use_window_listener};
use site_core::admin::ADMIN_PATH;
use site_core::{Backend, SiteConfig};

use crate::commands;
use crate::components::ToastHost;
use crate::context::AppContext;
use crate::pages::{AdminPage, IndexPage};

fn is_admin_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == ADMIN_PATH
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let token = commands::load_access_token(&config.session_key);
    let backend = Backend::from_config(&config, token);
    if backend.is_demo() {
        log::info!("[app] running on demo content");
    }

    // Provide context to all children
    let ctx = AppContext::new(config, backend, current_path());
    provide_context(ctx);

    // Theme class on <html>
    Effect::new(move |_| set_root_class("dark", ctx.dark_mode.get()));

    // Back/forward between the two pages
    use_window_listener("popstate", move |_| ctx.sync_path());

    let on_admin = Memo::new(move |_| is_admin_path(&ctx.path.get()));

    view! {
        {move || {
            if on_admin.get() {
                view! { <AdminPage /> }.into_any()
            } else {
                view! { <IndexPage /> }.into_any()
            }
        }}
        <ToastHost />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_path_matching() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/"));
        assert!(!is_admin_path("/"));
        assert!(!is_admin_path("/administrator"));
    }
}
