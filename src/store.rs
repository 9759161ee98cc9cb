//! Admin Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use site_core::admin::{perform, AdminAction, AdminData, AdminSink, AdminTab, SessionGate, TabRows};

use crate::context::AppContext;

/// Admin dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Session check for this mount
    pub gate: SessionGate,
    /// Queries, articles and portfolio entries
    pub data: AdminData,
    /// Selected tab
    pub tab: AdminTab,
    /// Record ids with an admin write in flight (any action kind)
    pub saving: Vec<String>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Store as the target of the site-core admin flows. Writes go through
/// `try_update`, so once the page is left the flow stops.
#[derive(Clone, Copy)]
pub struct StoreSink(pub AdminStore);

impl AdminSink for StoreSink {
    fn gate_decided(&self, gate: &SessionGate) -> bool {
        self.0.gate().try_update(|g| *g = gate.clone()).is_some()
    }

    fn begin(&self, tab: AdminTab) -> bool {
        self.0.data().try_update(|d| d.begin(tab)).is_some()
    }

    fn settle(&self, rows: TabRows) -> bool {
        self.0.data().try_update(|d| d.settle(rows)).is_some()
    }
}

/// Mark a row as having a write in flight
pub fn store_begin_saving(store: &AdminStore, id: &str) {
    store.saving().write().push(id.to_string());
}

pub fn store_end_saving(store: &AdminStore, id: &str) {
    store.saving().try_update(|saving| saving.retain(|s| s != id));
}

/// Tracked: use inside views
pub fn store_is_saving(store: &AdminStore, id: &str) -> bool {
    store.saving().read().iter().any(|s| s == id)
}

/// Write one record, refetch its collection on success, then notify.
/// `on_rejected` runs when the write was not applied (refused or failed),
/// so a row control can go back to the stored value.
pub fn store_run_action(ctx: AppContext, store: AdminStore, action: AdminAction, on_rejected: impl FnOnce() + 'static) {
    let id = action.record_id().to_string();
    if store.saving().read_untracked().iter().any(|s| *s == id) {
        on_rejected();
        return;
    }
    store_begin_saving(&store, &id);

    let backend = ctx.backend();
    spawn_local(async move {
        let outcome = perform(&backend, &StoreSink(store), &action).await;
        if !outcome.applied {
            on_rejected();
        }
        store_end_saving(&store, &id);
        ctx.notify(outcome.notice);
    });
}
