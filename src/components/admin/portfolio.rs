//! Portfolio table: feature and unfeature

use leptos::prelude::*;
use site_core::admin::AdminAction;
use site_core::domain::PortfolioItem;

use crate::context::use_app_context;
use crate::format;
use crate::store::{store_is_saving, store_run_action, use_admin_store, AdminStateStoreFields};

/// Technologies shown before collapsing into a `+N` badge
const SHOWN_TECHNOLOGIES: usize = 2;

#[component]
fn PortfolioRow(item: PortfolioItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let id = StoredValue::new(item.id.clone());
    let featured = item.featured;
    let (shown, hidden) = format::split_tags(&item.technologies, SHOWN_TECHNOLOGIES);

    view! {
        <tr>
            <td class="strong truncate">{item.title.clone()}</td>
            <td class="capitalize">{item.category.clone()}</td>
            <td>
                <div class="tag-list">
                    {shown.iter().map(|tech| view! { <span class="badge outline">{tech.clone()}</span> }).collect_view()}
                    {hidden.map(|n| view! { <span class="badge outline">{format!("+{}", n)}</span> })}
                </div>
            </td>
            <td>
                <span class={if featured { "badge default" } else { "badge outline" }}>
                    {if featured { "Featured" } else { "Regular" }}
                </span>
            </td>
            <td>{format::short_date(&item.created_at)}</td>
            <td>
                <button
                    class="btn-outline small"
                    disabled=move || store_is_saving(&store, &id.read_value())
                    on:click=move |_| {
                        store_run_action(
                            ctx,
                            store,
                            AdminAction::SetPortfolioFeatured { id: id.get_value(), featured: !featured },
                            || {},
                        )
                    }
                >
                    {if featured { "Unfeature" } else { "Feature" }}
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn PortfolioTable() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Portfolio Items"</h2>
                <p>"Manage your portfolio projects"</p>
            </div>
            <div class="table-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th>"Technologies"</th>
                            <th>"Featured"</th>
                            <th>"Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.data().read().portfolio.items().to_vec()
                            key=|p| (p.id.clone(), p.featured)
                            children=move |item| view! { <PortfolioRow item=item /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
