//! Public Content Commands
//!
//! Queries behind the marketing page's backend-fed sections.

use site_core::domain::{DomainResult, NewsArticle, PortfolioItem};
use site_core::repository::ListQuery;
use site_core::store::fetch_collection;
use site_core::Backend;

/// Published articles, newest first
pub async fn list_published_news(backend: &Backend) -> DomainResult<Vec<NewsArticle>> {
    let query = ListQuery::newest_first().eq("published", true);
    fetch_collection(backend, &query).await
}

/// Every portfolio entry, newest first
pub async fn list_portfolio(backend: &Backend) -> DomainResult<Vec<PortfolioItem>> {
    fetch_collection(backend, &ListQuery::newest_first()).await
}
