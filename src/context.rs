//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use site_core::admin::{ADMIN_PATH, HOME_PATH};
use site_core::notify::{Toast, TOAST_DURATION_MS};
use site_core::{Backend, SiteConfig};

/// A toast on screen, keyed so it can be dismissed individually
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub id: u32,
    pub toast: Toast,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend handle; not `Send`, so it lives in local storage
    backend: StoredValue<Backend, LocalStorage>,
    config: StoredValue<SiteConfig>,
    /// Toasts currently shown - read
    pub toasts: ReadSignal<Vec<ActiveToast>>,
    /// Toasts currently shown - write
    set_toasts: WriteSignal<Vec<ActiveToast>>,
    next_toast_id: StoredValue<u32>,
    /// Dark theme flag - read
    pub dark_mode: ReadSignal<bool>,
    /// Dark theme flag - write
    set_dark_mode: WriteSignal<bool>,
    /// Current location path - read
    pub path: ReadSignal<String>,
    /// Current location path - write
    set_path: WriteSignal<String>,
}

impl AppContext {
    pub fn new(config: SiteConfig, backend: Backend, path: String) -> Self {
        let (toasts, set_toasts) = signal(Vec::<ActiveToast>::new());
        let (dark_mode, set_dark_mode) = signal(false);
        let (path, set_path) = signal(path);
        Self {
            backend: StoredValue::new_local(backend),
            config: StoredValue::new(config),
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
            dark_mode,
            set_dark_mode,
            path,
            set_path,
        }
    }

    /// A clone of the backend handle, for moving into a task
    pub fn backend(&self) -> Backend {
        self.backend.get_value()
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// Show a toast; it dismisses itself after a few seconds
    pub fn notify(&self, toast: Toast) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        if toast.is_error() {
            log::error!("[toast] {}: {}", toast.title, toast.description);
        }
        self.set_toasts.update(|list| list.push(ActiveToast { id, toast }));

        let set_toasts = self.set_toasts;
        Timeout::new(TOAST_DURATION_MS, move || {
            set_toasts.try_update(|list| list.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Go to `path`: pages this app renders switch in place (so queued
    /// toasts survive), anything else is a full navigation
    pub fn navigate(&self, path: &str) {
        if path == HOME_PATH || path == ADMIN_PATH {
            if leptos_reveal::push_path(path) {
                self.set_path.set(path.to_string());
                return;
            }
        }
        leptos_reveal::redirect(path);
    }

    /// Sync with the address bar after back/forward
    pub fn sync_path(&self) {
        self.set_path.set(leptos_reveal::current_path());
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode.update(|dark| *dark = !*dark);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
