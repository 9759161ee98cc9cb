//! ProCorp Frontend Entry Point

mod app;
mod collection;
mod commands;
mod components;
mod context;
mod format;
mod logging;
mod markdown;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = commands::load_site_config();
    logging::init(config.log_level());
    log::info!(
        "[app] starting, backend {}",
        config.backend_url.as_deref().unwrap_or("(demo)")
    );

    mount_to_body(move || view! { <App config=config /> });
}
