//! Admin Dashboard Page
//!
//! Gated on an admin session. The three collections load only once the gate
//! authorizes; every write refetches the collection it touched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use site_core::admin::{enter, AdminTab, GateState, HOME_PATH};
use site_core::notify::Toast;

use crate::commands;
use crate::components::admin::{AdminStatsCards, ArticlesTable, PortfolioTable, QueriesTable};
use crate::context::use_app_context;
use crate::store::{AdminState, AdminStateStoreFields, StoreSink};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(AdminState::default());
    provide_context(store);

    // Session gate, then the initial loads
    let backend = ctx.backend();
    spawn_local(async move {
        if let GateState::Unauthorized(denial) = enter(&backend, &StoreSink(store)).await {
            if let Some(notice) = denial.notice() {
                ctx.notify(notice);
            }
            ctx.navigate(denial.redirect_path());
        }
    });

    let sign_out = move |_| {
        let backend = ctx.backend();
        let key = ctx.config().session_key;
        spawn_local(async move {
            if let Err(e) = commands::sign_out(&backend, &key).await {
                log::error!("[admin] sign out failed: {}", e);
                ctx.notify(Toast::error("Error", "Failed to sign out."));
            }
            ctx.navigate(HOME_PATH);
        });
    };

    let authorized = move || store.gate().read().is_authorized();
    let pending = move || matches!(store.gate().read().state(), GateState::Unchecked | GateState::Checking);
    let welcome = move || {
        store
            .gate()
            .read()
            .session()
            .map(|s| format!("Welcome back, {}", s.display_name()))
            .unwrap_or_default()
    };

    view! {
        <Show when=pending>
            <div class="page-center">
                <div class="loading-spinner" aria-label="Checking session"></div>
            </div>
        </Show>

        <Show when=authorized>
            <div class="admin-page">
                <header class="admin-header">
                    <div>
                        <h1>"Admin Dashboard"</h1>
                        <p class="muted">{welcome}</p>
                    </div>
                    <button class="btn-outline small" on:click=sign_out>"Sign Out"</button>
                </header>

                <main class="admin-main">
                    <AdminStatsCards />

                    <div class="tab-list" role="tablist">
                        {AdminTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        role="tab"
                                        class=move || if store.tab().get() == tab { "tab active" } else { "tab" }
                                        on:click=move |_| store.tab().set(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    {move || match store.tab().get() {
                        AdminTab::Queries => view! { <QueriesTable /> }.into_any(),
                        AdminTab::Articles => view! { <ArticlesTable /> }.into_any(),
                        AdminTab::Portfolio => view! { <PortfolioTable /> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
