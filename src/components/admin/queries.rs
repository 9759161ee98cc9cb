//! Contact queries table: status changes with an optional admin note

use leptos::prelude::*;
use site_core::admin::AdminAction;
use site_core::domain::{ContactQuery, QueryStatus};

use crate::context::use_app_context;
use crate::format;
use crate::store::{store_is_saving, store_run_action, use_admin_store, AdminStateStoreFields};

fn badge_class(status: QueryStatus) -> &'static str {
    match status {
        QueryStatus::Resolved => "badge default",
        QueryStatus::InProgress => "badge secondary",
        QueryStatus::Pending => "badge outline",
    }
}

#[component]
fn QueryRow(query: ContactQuery) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let id = StoredValue::new(query.id.clone());
    let saved_note = StoredValue::new(query.admin_notes.clone().unwrap_or_default());
    let note = RwSignal::new(saved_note.get_value());
    let current_status = query.status;
    // What the select shows; goes back to the stored status if a write is rejected
    let shown_status = RwSignal::new(current_status);

    let on_status = move |ev: web_sys::Event| {
        let Some(status) = QueryStatus::from_str(&event_target_value(&ev)) else {
            log::warn!("[admin] unknown status {:?}", event_target_value(&ev));
            shown_status.set(current_status);
            return;
        };
        shown_status.set(status);
        let current = note.get_untracked();
        // An untouched note is not sent, so the stored one is kept
        let note = (current != saved_note.get_value()).then_some(current);
        store_run_action(
            ctx,
            store,
            AdminAction::SetQueryStatus { id: id.get_value(), status, note },
            move || {
                shown_status.try_set(current_status);
            },
        );
    };

    view! {
        <tr>
            <td class="strong">{query.name.clone()}</td>
            <td>{query.email.clone()}</td>
            <td class="truncate" title={query.message.clone()}>{query.subject.clone()}</td>
            <td><span class={badge_class(current_status)}>{current_status.badge()}</span></td>
            <td>{format::short_date(&query.created_at)}</td>
            <td class="actions">
                <select
                    prop:value=move || shown_status.get().as_str()
                    on:change=on_status
                    disabled=move || store_is_saving(&store, &id.read_value())
                >
                    {QueryStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value={status.as_str()} selected={status == current_status}>
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    class="note-input"
                    placeholder="Admin note"
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                />
            </td>
        </tr>
    }
}

#[component]
pub fn QueriesTable() -> impl IntoView {
    let store = use_admin_store();
    let rows = move || store.data().read().queries.items().to_vec();

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Contact Queries"</h2>
                <p>"Manage and respond to customer inquiries"</p>
            </div>
            <div class="table-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Subject"</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Keyed on the mutable fields so a refetch re-renders changed rows
                        <For
                            each=rows
                            key=|q| (q.id.clone(), q.status, q.admin_notes.clone())
                            children=move |query| view! { <QueryRow query=query /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
