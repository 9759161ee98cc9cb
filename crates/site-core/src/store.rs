//! Remote Collection Store
//!
//! A cached copy of one backend collection together with the state of the
//! last fetch. Failures never clear what was loaded before.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Entity, Record};
use crate::repository::{CollectionRepository, ListQuery};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCollection<T> {
    items: Vec<T>,
    status: LoadStatus,
}

impl<T> Default for RemoteCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), status: LoadStatus::Idle }
    }
}

impl<T: Entity> RemoteCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&DomainError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Mark a fetch as in flight; items stay visible meanwhile
    pub fn begin(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Record the outcome of a fetch
    pub fn settle(&mut self, result: DomainResult<Vec<T>>) {
        match result {
            Ok(items) => {
                self.items = dedupe(items);
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                log::warn!("[store] fetch failed, keeping {} cached items: {}", self.items.len(), e);
                self.status = LoadStatus::Failed(e);
            }
        }
    }
}

/// Drop repeated ids, keeping the first occurrence
fn dedupe<T: Entity>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let total = items.len();
    let unique: Vec<T> = items.into_iter().filter(|item| seen.insert(item.id().to_string())).collect();
    if unique.len() != total {
        log::warn!("[store] dropped {} duplicate rows", total - unique.len());
    }
    unique
}

/// Fetch one collection slice
pub async fn fetch_collection<T, R>(repo: &R, query: &ListQuery) -> DomainResult<Vec<T>>
where
    T: Record,
    R: CollectionRepository<T> + ?Sized,
{
    log::debug!("[store] fetching {}", T::COLLECTION);
    let items = repo.list(query).await?;
    log::debug!("[store] fetched {} rows from {}", items.len(), T::COLLECTION);
    Ok(items)
}

impl<T: Record> RemoteCollection<T> {
    /// `begin`, fetch, `settle`
    pub async fn refresh<R>(&mut self, repo: &R, query: &ListQuery)
    where
        R: CollectionRepository<T> + ?Sized,
    {
        self.begin();
        let result = fetch_collection(repo, query).await;
        self.settle(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PortfolioItem;
    use crate::repository::MemoryBackend;
    use crate::seed;

    fn backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.insert(&seed::portfolio_items()).unwrap();
        backend
    }

    #[tokio::test]
    async fn test_refresh_loads_items() {
        let backend = backend();
        let mut store = RemoteCollection::<PortfolioItem>::new();
        assert_eq!(store.status(), &LoadStatus::Idle);

        store.refresh(&backend, &ListQuery::newest_first()).await;

        assert_eq!(store.status(), &LoadStatus::Ready);
        assert_eq!(store.items().len(), 6);
        assert_eq!(store.items()[0].id, "pf-manufacturing");
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let backend = backend();
        let mut store = RemoteCollection::<PortfolioItem>::new();
        store.refresh(&backend, &ListQuery::newest_first()).await;
        let before = store.items().to_vec();

        backend.fail(PortfolioItem::COLLECTION).unwrap();
        store.refresh(&backend, &ListQuery::newest_first()).await;

        assert!(store.error().is_some());
        assert!(!store.is_loading());
        assert_eq!(store.items(), before.as_slice());
    }

    #[tokio::test]
    async fn test_failure_before_any_load_stays_empty() {
        let backend = backend();
        backend.fail(PortfolioItem::COLLECTION).unwrap();
        let mut store = RemoteCollection::<PortfolioItem>::new();

        store.refresh(&backend, &ListQuery::newest_first()).await;

        assert!(store.items().is_empty());
        assert!(matches!(store.status(), LoadStatus::Failed(DomainError::Backend { status: 503, .. })));
    }

    #[test]
    fn test_begin_keeps_items_visible() {
        let mut store = RemoteCollection::new();
        store.settle(Ok(seed::portfolio_items()));
        store.begin();
        assert!(store.is_loading());
        assert_eq!(store.items().len(), 6);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut items = seed::portfolio_items();
        let mut copy = items[1].clone();
        copy.title = "Stale copy".to_string();
        items.push(copy);

        let mut store = RemoteCollection::new();
        store.settle(Ok(items));

        assert_eq!(store.items().len(), 6);
        assert_eq!(store.items()[1].title, "Financial Risk Assessment Platform");
    }
}
