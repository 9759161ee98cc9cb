//! Hosted backend over HTTP
//!
//! Collections are served PostgREST-style under `/rest/v1/<collection>`,
//! the auth subsystem under `/auth/v1`. Every request carries the public
//! `apikey`; the bearer is the user's access token when signed in and the
//! anon key otherwise.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::query::ListQuery;
use super::traits::{CollectionRepository, SessionRepository};
use crate::config::BackendConfig;
use crate::domain::{DomainError, DomainResult, Record, Session, ADMIN_PROFILES};

#[derive(Debug, Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

/// User object returned by `GET /auth/v1/user`
#[derive(Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl RestBackend {
    pub fn new(config: &BackendConfig, access_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            access_token,
        }
    }

    fn rest_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        request.header("apikey", &self.anon_key).bearer_auth(bearer)
    }

    async fn select_rows(&self, collection: &str, query: &ListQuery) -> DomainResult<Response> {
        log::debug!("[rest] GET {} {:?}", collection, query.to_params());
        let request = self.authorize(self.client.get(self.rest_url(collection)));
        let response = request.query(&query.to_params()).send().await?;
        check(response).await
    }
}

/// Turn a non-2xx response into `DomainError::Backend` carrying the body text
async fn check(response: Response) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(DomainError::Backend { status: status.as_u16(), message })
}

/// A PATCH filtered on an id that matches nothing still succeeds; the
/// returned representation is empty then.
fn matched_one(rows: &[Value], collection: &str, id: &str) -> DomainResult<()> {
    if rows.is_empty() {
        return Err(DomainError::NotFound(format!("{} {}", collection, id)));
    }
    Ok(())
}

#[async_trait(?Send)]
impl<T: Record> CollectionRepository<T> for RestBackend {
    async fn list(&self, query: &ListQuery) -> DomainResult<Vec<T>> {
        let response = self.select_rows(T::COLLECTION, query).await?;
        Ok(response.json::<Vec<T>>().await?)
    }

    async fn update_by_id(&self, id: &str, patch: &T::Patch) -> DomainResult<()> {
        log::debug!("[rest] PATCH {} id={}", T::COLLECTION, id);
        let request = self.authorize(self.client.patch(self.rest_url(T::COLLECTION)));
        let response = request
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        let rows: Vec<Value> = check(response).await?.json().await?;
        matched_one(&rows, T::COLLECTION, id)
    }
}

#[async_trait(?Send)]
impl SessionRepository for RestBackend {
    async fn get_session(&self) -> DomainResult<Option<Session>> {
        let Some(token) = self.access_token.as_deref() else {
            return Ok(None);
        };
        let response = self
            .client
            .get(self.auth_url("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;
        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            log::info!("[rest] stored access token was rejected");
            return Ok(None);
        }
        let user: AuthUser = check(response).await?.json().await?;
        Ok(Some(Session::new(user.id, user.email)))
    }

    async fn is_admin(&self, user_id: &str) -> DomainResult<bool> {
        let query = ListQuery::new().eq("user_id", user_id).limit(1);
        let rows: Vec<Value> = self.select_rows(ADMIN_PROFILES, &query).await?.json().await?;
        Ok(!rows.is_empty())
    }

    async fn sign_out(&self) -> DomainResult<()> {
        if self.access_token.is_none() {
            return Ok(());
        }
        let response = self.authorize(self.client.post(self.auth_url("logout"))).send().await?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> BackendConfig {
        BackendConfig { url: url.to_string(), anon_key: "anon".to_string() }
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let backend = RestBackend::new(&config("https://db.example.com/"), None);
        assert_eq!(backend.rest_url("news_articles"), "https://db.example.com/rest/v1/news_articles");
        assert_eq!(backend.auth_url("user"), "https://db.example.com/auth/v1/user");
    }

    #[test]
    fn test_update_without_matching_row_is_not_found() {
        let updated = vec![serde_json::json!({ "id": "news-1", "published": true })];
        assert_eq!(matched_one(&updated, "news_articles", "news-1"), Ok(()));
        assert!(matches!(matched_one(&[], "news_articles", "missing"), Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_no_token_means_no_session() {
        // No request is made without a token, so the unroutable host is never contacted.
        let backend = RestBackend::new(&config("http://127.0.0.1:9"), None);
        assert_eq!(backend.get_session().await, Ok(None));
        assert_eq!(backend.sign_out().await, Ok(()));
    }
}
