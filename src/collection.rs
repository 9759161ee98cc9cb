//! Remote collection signals
//!
//! Glue between `RemoteCollection` values and the views that render them.
//! A response that arrives after its view was disposed is dropped:
//! `try_update` on a disposed signal does nothing.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::domain::{DomainResult, Entity};
use site_core::store::{LoadStatus, RemoteCollection};
use site_core::view_state::ViewState;

/// Fetch into `target`, then prune `view` to the ids that came back
pub fn load_collection<T, Fut>(target: RwSignal<RemoteCollection<T>>, view: RwSignal<ViewState>, fetch: Fut)
where
    T: Entity + Send + Sync + 'static,
    Fut: Future<Output = DomainResult<Vec<T>>> + 'static,
{
    if target.try_update(|c| c.begin()).is_none() {
        return;
    }
    spawn_local(async move {
        let result = fetch.await;
        let settled = target.try_update(|c| {
            c.settle(result);
            if *c.status() == LoadStatus::Ready {
                view.try_update(|v| v.retain_known(c.items()));
            }
        });
        if settled.is_none() {
            log::debug!("[collection] view disposed, dropping late response");
        }
    });
}
