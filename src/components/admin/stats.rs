//! Dashboard counters and the "View Site" card

use leptos::prelude::*;
use site_core::admin::HOME_PATH;

use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
fn StatCard(title: &'static str, value: Signal<usize>, detail: Signal<String>) -> impl IntoView {
    view! {
        <div class="card stat">
            <div class="card-title">{title}</div>
            <div class="stat-value">{move || value.get()}</div>
            <p class="card-detail">{move || detail.get()}</p>
        </div>
    }
}

#[component]
pub fn AdminStatsCards() -> impl IntoView {
    let store = use_admin_store();
    let stats = Memo::new(move |_| store.data().read().stats());

    view! {
        <div class="stats-grid">
            <StatCard
                title="Total Queries"
                value=Signal::derive(move || stats.get().total_queries)
                detail=Signal::derive(move || format!("{} pending", stats.get().pending_queries))
            />
            <StatCard
                title="Published Articles"
                value=Signal::derive(move || stats.get().published_articles)
                detail=Signal::derive(move || format!("{} drafts", stats.get().draft_articles))
            />
            <StatCard
                title="Portfolio Items"
                value=Signal::derive(move || stats.get().portfolio_items)
                detail=Signal::derive(move || format!("{} featured", stats.get().featured_items))
            />
            <div class="card stat">
                <div class="card-title">"Website"</div>
                <button class="btn-outline full-width" on:click=move |_| leptos_reveal::open_in_new_tab(HOME_PATH)>
                    "View Site"
                </button>
            </div>
        </div>
    }
}
