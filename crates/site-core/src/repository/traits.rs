//! Repository Layer - Core Traits
//!
//! Defines the narrow interfaces the site needs from its backend.
//! Implementations talk to the hosted REST API or keep rows in memory.
//!
//! Futures are `?Send`: everything runs on the browser's single event loop.

use async_trait::async_trait;

use super::query::ListQuery;
use crate::domain::{ContactQuery, DomainResult, NewsArticle, PortfolioItem, Record, Session};

/// Read and single-record update access to one collection
#[async_trait(?Send)]
pub trait CollectionRepository<T: Record> {
    /// Rows matching the descriptor, in the requested order
    async fn list(&self, query: &ListQuery) -> DomainResult<Vec<T>>;

    /// Apply a partial update to the row with the given id
    async fn update_by_id(&self, id: &str, patch: &T::Patch) -> DomainResult<()>;
}

/// Access to the backend's auth subsystem
#[async_trait(?Send)]
pub trait SessionRepository {
    /// Current session, `None` when signed out
    async fn get_session(&self) -> DomainResult<Option<Session>>;

    /// Whether the user has an admin profile record
    async fn is_admin(&self, user_id: &str) -> DomainResult<bool>;

    /// End the current session
    async fn sign_out(&self) -> DomainResult<()>;
}

/// Everything the admin panel talks to
pub trait AdminBackend:
    SessionRepository
    + CollectionRepository<ContactQuery>
    + CollectionRepository<NewsArticle>
    + CollectionRepository<PortfolioItem>
{
}

impl<B> AdminBackend for B where
    B: SessionRepository
        + CollectionRepository<ContactQuery>
        + CollectionRepository<NewsArticle>
        + CollectionRepository<PortfolioItem>
{
}
