//! Repository Integration Tests
//!
//! Exercises the in-memory backend through the repository traits.

#[cfg(test)]
mod tests {
    use crate::domain::{ArticlePatch, ContactQuery, DomainError, NewsArticle, PortfolioItem, Record, Session};
    use crate::repository::{Backend, CollectionRepository, ListQuery, MemoryBackend, SessionRepository};
    use crate::seed;

    fn setup_backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.insert(&seed::news_articles()).expect("Failed to seed articles");
        backend.insert(&seed::portfolio_items()).expect("Failed to seed portfolio");
        backend
    }

    #[tokio::test]
    async fn test_list_published_news() {
        let backend = setup_backend();

        let query = ListQuery::newest_first().eq("published", true);
        let articles: Vec<NewsArticle> = backend.list(&query).await.expect("List failed");

        assert_eq!(articles.len(), 4);
        assert!(articles.iter().all(|a| a.published));
        assert_eq!(articles[0].title, "Digital Transformation Trends Shaping 2024");
        assert_eq!(articles[3].author_name, "David Thompson");
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let backend = setup_backend();

        let items: Vec<PortfolioItem> = backend.list(&ListQuery::newest_first().limit(2)).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "pf-risk-platform");
    }

    #[tokio::test]
    async fn test_empty_collection_lists_nothing() {
        let backend = setup_backend();
        let queries: Vec<ContactQuery> = backend.list(&ListQuery::new()).await.unwrap();
        assert!(queries.is_empty());
    }

    #[tokio::test]
    async fn test_update_by_id_merges_patch() {
        let backend = setup_backend();

        let patch = ArticlePatch { published: false };
        CollectionRepository::<NewsArticle>::update_by_id(&backend, "news-sustainability", &patch)
            .await
            .expect("Update failed");

        let all: Vec<NewsArticle> = backend.list(&ListQuery::new()).await.unwrap();
        let updated = all.iter().find(|a| a.id == "news-sustainability").unwrap();
        assert!(!updated.published);
        assert_eq!(updated.author_name, "Emma Davis");
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let backend = setup_backend();
        let patch = ArticlePatch { published: true };
        let result = CollectionRepository::<NewsArticle>::update_by_id(&backend, "nope", &patch).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_failure_injection_and_recovery() {
        let backend = setup_backend();
        backend.fail(NewsArticle::COLLECTION).unwrap();

        let failed: Result<Vec<NewsArticle>, _> = backend.list(&ListQuery::new()).await;
        assert!(failed.is_err());

        backend.recover(NewsArticle::COLLECTION).unwrap();
        let recovered: Vec<NewsArticle> = backend.list(&ListQuery::new()).await.unwrap();
        assert_eq!(recovered.len(), 5);
        assert_eq!(backend.list_calls(NewsArticle::COLLECTION), 2);
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let backend = setup_backend();
        assert_eq!(backend.get_session().await, Ok(None));

        backend.set_session(Some(Session::new("u-7", None))).unwrap();
        backend.grant_admin("u-7").unwrap();
        assert!(backend.is_admin("u-7").await.unwrap());
        assert!(!backend.is_admin("u-8").await.unwrap());

        backend.sign_out().await.unwrap();
        assert_eq!(backend.get_session().await, Ok(None));
    }

    #[tokio::test]
    async fn test_backend_enum_delegates_to_memory() {
        let backend = Backend::Memory(seed::demo_backend());
        assert!(backend.is_demo());

        let items: Vec<PortfolioItem> = backend.list(&ListQuery::new().eq("featured", true)).await.unwrap();
        assert_eq!(items.len(), 2);

        let session = backend.get_session().await.unwrap().expect("demo session");
        assert!(backend.is_admin(&session.user_id).await.unwrap());
    }
}
