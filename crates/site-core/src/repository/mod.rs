//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod query;
mod rest;
mod memory;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

pub use traits::{AdminBackend, CollectionRepository, SessionRepository};
pub use query::{ListQuery, Order, CREATED_AT};
pub use rest::RestBackend;
pub use memory::MemoryBackend;

use crate::config::SiteConfig;
use crate::domain::{DomainResult, Record, Session};

/// The backend the site is wired to
#[derive(Clone)]
pub enum Backend {
    Rest(RestBackend),
    Memory(MemoryBackend),
}

impl Backend {
    /// Hosted backend when configured, seeded demo data otherwise
    pub fn from_config(config: &SiteConfig, access_token: Option<String>) -> Self {
        match config.backend() {
            Some(backend) => Backend::Rest(RestBackend::new(&backend, access_token)),
            None => {
                log::info!("[backend] no backend configured, serving demo content");
                Backend::Memory(crate::seed::demo_backend())
            }
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Backend::Memory(_))
    }
}

#[async_trait(?Send)]
impl<T: Record> CollectionRepository<T> for Backend {
    async fn list(&self, query: &ListQuery) -> DomainResult<Vec<T>> {
        match self {
            Backend::Rest(rest) => CollectionRepository::<T>::list(rest, query).await,
            Backend::Memory(memory) => CollectionRepository::<T>::list(memory, query).await,
        }
    }

    async fn update_by_id(&self, id: &str, patch: &T::Patch) -> DomainResult<()> {
        match self {
            Backend::Rest(rest) => CollectionRepository::<T>::update_by_id(rest, id, patch).await,
            Backend::Memory(memory) => CollectionRepository::<T>::update_by_id(memory, id, patch).await,
        }
    }
}

#[async_trait(?Send)]
impl SessionRepository for Backend {
    async fn get_session(&self) -> DomainResult<Option<Session>> {
        match self {
            Backend::Rest(rest) => rest.get_session().await,
            Backend::Memory(memory) => memory.get_session().await,
        }
    }

    async fn is_admin(&self, user_id: &str) -> DomainResult<bool> {
        match self {
            Backend::Rest(rest) => rest.is_admin(user_id).await,
            Backend::Memory(memory) => memory.is_admin(user_id).await,
        }
    }

    async fn sign_out(&self) -> DomainResult<()> {
        match self {
            Backend::Rest(rest) => rest.sign_out().await,
            Backend::Memory(memory) => memory.sign_out().await,
        }
    }
}
