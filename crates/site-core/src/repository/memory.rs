//! In-memory backend
//!
//! Keeps every collection as JSON rows and evaluates `ListQuery` with the
//! same semantics as the REST backend. Serves the demo site when no hosted
//! backend is configured and stands in for the backend in tests, where it can
//! count requests and inject failures.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use super::query::ListQuery;
use super::traits::{CollectionRepository, SessionRepository};
use crate::domain::{DomainError, DomainResult, Record, Session};

#[derive(Default)]
struct Tables {
    rows: HashMap<String, Vec<Value>>,
    session: Option<Session>,
    admins: HashSet<String>,
    failing: HashSet<String>,
    list_calls: HashMap<String, usize>,
}

#[derive(Clone, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| DomainError::Internal("memory backend lock poisoned".to_string()))
    }

    /// Append records to their collection
    pub fn insert<T: Record>(&self, records: &[T]) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let rows = tables.rows.entry(T::COLLECTION.to_string()).or_default();
        for record in records {
            rows.push(serde_json::to_value(record)?);
        }
        Ok(())
    }

    pub fn set_session(&self, session: Option<Session>) -> DomainResult<()> {
        self.lock()?.session = session;
        Ok(())
    }

    pub fn grant_admin(&self, user_id: &str) -> DomainResult<()> {
        self.lock()?.admins.insert(user_id.to_string());
        Ok(())
    }

    /// Make every list/update on `collection` fail until `recover` is called
    pub fn fail(&self, collection: &str) -> DomainResult<()> {
        self.lock()?.failing.insert(collection.to_string());
        Ok(())
    }

    pub fn recover(&self, collection: &str) -> DomainResult<()> {
        self.lock()?.failing.remove(collection);
        Ok(())
    }

    /// Number of `list` calls issued against `collection`
    pub fn list_calls(&self, collection: &str) -> usize {
        self.lock()
            .map(|tables| tables.list_calls.get(collection).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

fn unavailable(collection: &str) -> DomainError {
    DomainError::Backend {
        status: 503,
        message: format!("{} unavailable", collection),
    }
}

#[async_trait(?Send)]
impl<T: Record> CollectionRepository<T> for MemoryBackend {
    async fn list(&self, query: &ListQuery) -> DomainResult<Vec<T>> {
        let rows = {
            let mut tables = self.lock()?;
            *tables.list_calls.entry(T::COLLECTION.to_string()).or_default() += 1;
            if tables.failing.contains(T::COLLECTION) {
                return Err(unavailable(T::COLLECTION));
            }
            let rows = tables.rows.get(T::COLLECTION).cloned().unwrap_or_default();
            query.apply(rows)
        };
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(DomainError::from))
            .collect()
    }

    async fn update_by_id(&self, id: &str, patch: &T::Patch) -> DomainResult<()> {
        let patch = serde_json::to_value(patch)?;
        let Value::Object(fields) = patch else {
            return Err(DomainError::InvalidInput("patch must be an object".to_string()));
        };
        let mut tables = self.lock()?;
        if tables.failing.contains(T::COLLECTION) {
            return Err(unavailable(T::COLLECTION));
        }
        let rows = tables.rows.entry(T::COLLECTION.to_string()).or_default();
        let row = rows
            .iter_mut()
            .find(|row| row.get("id").and_then(Value::as_str) == Some(id))
            .ok_or_else(|| DomainError::NotFound(format!("{} {}", T::COLLECTION, id)))?;
        if let Value::Object(target) = row {
            for (key, value) in fields {
                target.insert(key, value);
            }
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl SessionRepository for MemoryBackend {
    async fn get_session(&self) -> DomainResult<Option<Session>> {
        Ok(self.lock()?.session.clone())
    }

    async fn is_admin(&self, user_id: &str) -> DomainResult<bool> {
        Ok(self.lock()?.admins.contains(user_id))
    }

    async fn sign_out(&self) -> DomainResult<()> {
        self.lock()?.session = None;
        Ok(())
    }
}
