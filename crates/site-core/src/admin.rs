//! Admin Session Gate and managed collections
//!
//! The gate decides once per mount whether the admin panel may load. After
//! that every mutation is a single-record write followed by a full refetch of
//! the collection it touched.

use std::cell::RefCell;

use crate::domain::{
    ArticlePatch, ContactQuery, DomainResult, NewsArticle, PortfolioItem, PortfolioPatch, QueryPatch, QueryStatus,
    Record, Session,
};
use crate::notify::Toast;
use crate::repository::{AdminBackend, CollectionRepository, ListQuery, SessionRepository};
use crate::store::{fetch_collection, RemoteCollection};

pub const ADMIN_PATH: &str = "/admin";
pub const AUTH_PATH: &str = "/auth";
pub const HOME_PATH: &str = "/";

/// Why the gate refused entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NoSession,
    NotAdmin,
}

impl Denial {
    pub fn redirect_path(self) -> &'static str {
        match self {
            Denial::NoSession => AUTH_PATH,
            Denial::NotAdmin => HOME_PATH,
        }
    }

    /// Notification shown before redirecting
    pub fn notice(self) -> Option<Toast> {
        match self {
            Denial::NoSession => None,
            Denial::NotAdmin => Some(Toast::error("Access Denied", "You don't have admin privileges.")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Unchecked,
    Checking,
    Authorized(Session),
    Unauthorized(Denial),
}

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    state: GateState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            GateState::Authorized(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.session().is_some()
    }

    /// Look up the session and the admin record. A refusal is final.
    pub async fn check<A: SessionRepository + ?Sized>(&mut self, auth: &A) -> &GateState {
        if matches!(self.state, GateState::Unauthorized(_)) {
            return &self.state;
        }
        self.state = GateState::Checking;

        let session = match auth.get_session().await {
            Ok(Some(session)) => session,
            Ok(None) => return self.deny(Denial::NoSession),
            Err(e) => {
                log::warn!("[gate] session lookup failed: {}", e);
                return self.deny(Denial::NoSession);
            }
        };

        match auth.is_admin(&session.user_id).await {
            Ok(true) => {
                log::info!("[gate] admin session for {}", session.display_name());
                self.state = GateState::Authorized(session);
            }
            Ok(false) => return self.deny(Denial::NotAdmin),
            Err(e) => {
                log::warn!("[gate] admin lookup failed: {}", e);
                return self.deny(Denial::NotAdmin);
            }
        }
        &self.state
    }

    fn deny(&mut self, denial: Denial) -> &GateState {
        log::info!("[gate] access denied: {:?}", denial);
        self.state = GateState::Unauthorized(denial);
        &self.state
    }
}

/// Management tabs, one per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminTab {
    #[default]
    Queries,
    Articles,
    Portfolio,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Queries, AdminTab::Articles, AdminTab::Portfolio];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Queries => "Contact Queries",
            AdminTab::Articles => "News Articles",
            AdminTab::Portfolio => "Portfolio",
        }
    }

    pub fn collection(self) -> &'static str {
        match self {
            AdminTab::Queries => ContactQuery::COLLECTION,
            AdminTab::Articles => NewsArticle::COLLECTION,
            AdminTab::Portfolio => PortfolioItem::COLLECTION,
        }
    }
}

/// Result of fetching one tab's collection
#[derive(Debug, Clone, PartialEq)]
pub enum TabRows {
    Queries(DomainResult<Vec<ContactQuery>>),
    Articles(DomainResult<Vec<NewsArticle>>),
    Portfolio(DomainResult<Vec<PortfolioItem>>),
}

/// Fetch a tab's collection, unfiltered and newest first
pub async fn fetch_tab<B: AdminBackend + ?Sized>(backend: &B, tab: AdminTab) -> TabRows {
    let query = ListQuery::newest_first();
    match tab {
        AdminTab::Queries => TabRows::Queries(fetch_collection(backend, &query).await),
        AdminTab::Articles => TabRows::Articles(fetch_collection(backend, &query).await),
        AdminTab::Portfolio => TabRows::Portfolio(fetch_collection(backend, &query).await),
    }
}

/// The three managed collections
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminData {
    pub queries: RemoteCollection<ContactQuery>,
    pub articles: RemoteCollection<NewsArticle>,
    pub portfolio: RemoteCollection<PortfolioItem>,
}

impl AdminData {
    pub fn begin(&mut self, tab: AdminTab) {
        match tab {
            AdminTab::Queries => self.queries.begin(),
            AdminTab::Articles => self.articles.begin(),
            AdminTab::Portfolio => self.portfolio.begin(),
        }
    }

    pub fn settle(&mut self, rows: TabRows) {
        match rows {
            TabRows::Queries(result) => self.queries.settle(result),
            TabRows::Articles(result) => self.articles.settle(result),
            TabRows::Portfolio(result) => self.portfolio.settle(result),
        }
    }

    pub fn stats(&self) -> AdminStats {
        let queries = self.queries.items();
        let articles = self.articles.items();
        let portfolio = self.portfolio.items();
        let published = articles.iter().filter(|a| a.published).count();
        AdminStats {
            total_queries: queries.len(),
            pending_queries: queries.iter().filter(|q| q.status == QueryStatus::Pending).count(),
            published_articles: published,
            draft_articles: articles.len() - published,
            portfolio_items: portfolio.len(),
            featured_items: portfolio.iter().filter(|p| p.featured).count(),
        }
    }
}

/// Where the dashboard flows write their results.
///
/// Every method returns `false` once the receiver is gone (the page was
/// left); the flow then stops and drops whatever it was holding.
pub trait AdminSink {
    /// The gate reached a decision
    fn gate_decided(&self, gate: &SessionGate) -> bool;

    /// A tab's collection is about to be fetched
    fn begin(&self, tab: AdminTab) -> bool;

    /// A tab's fetch came back
    fn settle(&self, rows: TabRows) -> bool;
}

/// Plain in-memory sink
impl AdminSink for RefCell<AdminData> {
    fn gate_decided(&self, _gate: &SessionGate) -> bool {
        true
    }

    fn begin(&self, tab: AdminTab) -> bool {
        self.borrow_mut().begin(tab);
        true
    }

    fn settle(&self, rows: TabRows) -> bool {
        self.borrow_mut().settle(rows);
        true
    }
}

/// Refetch one tab into `sink`
pub async fn refresh_tab<B, S>(backend: &B, sink: &S, tab: AdminTab) -> bool
where
    B: AdminBackend + ?Sized,
    S: AdminSink + ?Sized,
{
    if !sink.begin(tab) {
        return false;
    }
    let rows = fetch_tab(backend, tab).await;
    if !sink.settle(rows) {
        log::debug!("[admin] page left, dropping {} rows", tab.collection());
        return false;
    }
    true
}

/// Run the gate and, only when authorized, load every managed collection.
/// Returns the gate's decision.
pub async fn enter<B, S>(backend: &B, sink: &S) -> GateState
where
    B: AdminBackend + ?Sized,
    S: AdminSink + ?Sized,
{
    let mut gate = SessionGate::new();
    let state = gate.check(backend).await.clone();
    if !sink.gate_decided(&gate) || !gate.is_authorized() {
        return state;
    }
    // Initial load of every tab; order carries no meaning
    for tab in AdminTab::ALL {
        if !refresh_tab(backend, sink, tab).await {
            break;
        }
    }
    state
}

/// What an executed admin write led to
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// The backend accepted the write
    pub applied: bool,
    pub notice: Toast,
}

/// Execute a mutation; on success refetch the collection it touched
pub async fn perform<B, S>(backend: &B, sink: &S, action: &AdminAction) -> ActionOutcome
where
    B: AdminBackend + ?Sized,
    S: AdminSink + ?Sized,
{
    let result = action.execute(backend).await;
    let (refetch, notice) = action.resolve(&result);
    if let Some(tab) = refetch {
        refresh_tab(backend, sink, tab).await;
    }
    ActionOutcome { applied: result.is_ok(), notice }
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminStats {
    pub total_queries: usize,
    pub pending_queries: usize,
    pub published_articles: usize,
    pub draft_articles: usize,
    pub portfolio_items: usize,
    pub featured_items: usize,
}

/// A single-record admin write
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    SetQueryStatus { id: String, status: QueryStatus, note: Option<String> },
    SetArticlePublished { id: String, published: bool },
    SetPortfolioFeatured { id: String, featured: bool },
}

async fn update_record<T, R>(repo: &R, id: &str, patch: &T::Patch) -> DomainResult<()>
where
    T: Record,
    R: CollectionRepository<T> + ?Sized,
{
    repo.update_by_id(id, patch).await
}

impl AdminAction {
    /// Tab whose collection the action writes to
    pub fn tab(&self) -> AdminTab {
        match self {
            AdminAction::SetQueryStatus { .. } => AdminTab::Queries,
            AdminAction::SetArticlePublished { .. } => AdminTab::Articles,
            AdminAction::SetPortfolioFeatured { .. } => AdminTab::Portfolio,
        }
    }

    pub fn record_id(&self) -> &str {
        match self {
            AdminAction::SetQueryStatus { id, .. }
            | AdminAction::SetArticlePublished { id, .. }
            | AdminAction::SetPortfolioFeatured { id, .. } => id,
        }
    }

    pub async fn execute<B: AdminBackend + ?Sized>(&self, backend: &B) -> DomainResult<()> {
        let result = match self {
            AdminAction::SetQueryStatus { id, status, note } => {
                let patch = QueryPatch { status: *status, admin_notes: note.clone() };
                update_record::<ContactQuery, B>(backend, id, &patch).await
            }
            AdminAction::SetArticlePublished { id, published } => {
                let patch = ArticlePatch { published: *published };
                update_record::<NewsArticle, B>(backend, id, &patch).await
            }
            AdminAction::SetPortfolioFeatured { id, featured } => {
                let patch = PortfolioPatch { featured: *featured };
                update_record::<PortfolioItem, B>(backend, id, &patch).await
            }
        };
        if let Err(e) = &result {
            log::error!("[admin] {:?} failed: {}", self, e);
        }
        result
    }

    /// What follows an executed write: the tab to refetch (only on
    /// success) and the notification to show
    pub fn resolve(&self, result: &DomainResult<()>) -> (Option<AdminTab>, Toast) {
        match result {
            Ok(()) => (Some(self.tab()), self.success_notice()),
            Err(_) => (None, self.failure_notice()),
        }
    }

    pub fn success_notice(&self) -> Toast {
        let description = match self {
            AdminAction::SetQueryStatus { .. } => "Query status has been updated.".to_string(),
            AdminAction::SetArticlePublished { published, .. } => {
                format!("Article {} successfully.", if *published { "published" } else { "unpublished" })
            }
            AdminAction::SetPortfolioFeatured { featured, .. } => {
                format!("Portfolio item {} successfully.", if *featured { "featured" } else { "unfeatured" })
            }
        };
        Toast::info("Updated", description)
    }

    pub fn failure_notice(&self) -> Toast {
        let description = match self {
            AdminAction::SetQueryStatus { .. } => "Failed to update query status.",
            AdminAction::SetArticlePublished { .. } => "Failed to update article status.",
            AdminAction::SetPortfolioFeatured { .. } => "Failed to update portfolio item.",
        };
        Toast::error("Error", description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Entity};
    use crate::repository::MemoryBackend;
    use crate::seed;

    fn seeded() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.insert(&seed::contact_queries()).unwrap();
        backend.insert(&seed::news_articles()).unwrap();
        backend.insert(&seed::portfolio_items()).unwrap();
        backend
    }

    fn signed_in_admin() -> MemoryBackend {
        let backend = seeded();
        backend.set_session(Some(Session::new("u-1", Some("ops@procorp.com".to_string())))).unwrap();
        backend.grant_admin("u-1").unwrap();
        backend
    }

    fn total_list_calls(backend: &MemoryBackend) -> usize {
        AdminTab::ALL.iter().map(|tab| backend.list_calls(tab.collection())).sum()
    }

    /// A sink whose page was left before anything came back
    struct LeftPage;

    impl AdminSink for LeftPage {
        fn gate_decided(&self, _gate: &SessionGate) -> bool {
            false
        }

        fn begin(&self, _tab: AdminTab) -> bool {
            false
        }

        fn settle(&self, _rows: TabRows) -> bool {
            false
        }
    }

    async fn loaded(backend: &MemoryBackend) -> RefCell<AdminData> {
        let data = RefCell::new(AdminData::default());
        assert!(matches!(enter(backend, &data).await, GateState::Authorized(_)));
        data
    }

    #[tokio::test]
    async fn test_no_session_denies_and_loads_nothing() {
        let backend = seeded();
        let data = RefCell::new(AdminData::default());

        let state = enter(&backend, &data).await;

        assert_eq!(state, GateState::Unauthorized(Denial::NoSession));
        assert_eq!(Denial::NoSession.redirect_path(), AUTH_PATH);
        assert_eq!(total_list_calls(&backend), 0);
        assert_eq!(*data.borrow(), AdminData::default());
    }

    #[tokio::test]
    async fn test_non_admin_is_denied_with_notice() {
        let backend = seeded();
        backend.set_session(Some(Session::new("visitor", None))).unwrap();
        let data = RefCell::new(AdminData::default());

        let state = enter(&backend, &data).await;

        assert_eq!(state, GateState::Unauthorized(Denial::NotAdmin));
        assert_eq!(Denial::NotAdmin.redirect_path(), HOME_PATH);
        assert_eq!(Denial::NotAdmin.notice().map(|t| t.title), Some("Access Denied".to_string()));
        assert_eq!(total_list_calls(&backend), 0);
    }

    #[tokio::test]
    async fn test_denial_is_terminal() {
        let backend = seeded();
        let mut gate = SessionGate::new();
        gate.check(&backend).await;

        backend.set_session(Some(Session::new("u-1", None))).unwrap();
        backend.grant_admin("u-1").unwrap();

        assert_eq!(gate.check(&backend).await, &GateState::Unauthorized(Denial::NoSession));
    }

    #[tokio::test]
    async fn test_admin_loads_all_three_collections() {
        let backend = signed_in_admin();
        let data = RefCell::new(AdminData::default());

        let state = enter(&backend, &data).await;

        let GateState::Authorized(session) = state else {
            panic!("expected an admin session, got {:?}", state);
        };
        assert_eq!(session.display_name(), "ops@procorp.com");
        let data = data.borrow();
        assert_eq!(data.queries.items().len(), 3);
        assert_eq!(data.articles.items().len(), 5);
        assert_eq!(data.portfolio.items().len(), 6);
        assert_eq!(data.articles.items()[0].id, "news-draft-outlook");
        for tab in AdminTab::ALL {
            assert_eq!(backend.list_calls(tab.collection()), 1);
        }
    }

    #[tokio::test]
    async fn test_left_page_stops_initial_loads() {
        let backend = signed_in_admin();

        let state = enter(&backend, &LeftPage).await;

        assert!(matches!(state, GateState::Authorized(_)));
        assert_eq!(total_list_calls(&backend), 0);
        assert!(!refresh_tab(&backend, &LeftPage, AdminTab::Articles).await);
        assert_eq!(total_list_calls(&backend), 0);
    }

    #[tokio::test]
    async fn test_publish_toggle_is_reflected_once() {
        let backend = signed_in_admin();
        let data = loaded(&backend).await;

        let action = AdminAction::SetArticlePublished { id: "news-draft-outlook".to_string(), published: true };
        let outcome = perform(&backend, &data, &action).await;

        assert!(outcome.applied);
        assert_eq!(outcome.notice.description, "Article published successfully.");
        let data = data.borrow();
        let copies: Vec<_> = data.articles.items().iter().filter(|a| a.id() == "news-draft-outlook").collect();
        assert_eq!(copies.len(), 1);
        assert!(copies[0].published);
        assert_eq!(data.articles.items().len(), 5);
        assert_eq!(backend.list_calls(NewsArticle::COLLECTION), 2);
        assert_eq!(backend.list_calls(ContactQuery::COLLECTION), 1);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_state_and_skips_refetch() {
        let backend = signed_in_admin();
        let data = loaded(&backend).await;
        let before = data.borrow().clone();

        backend.fail(PortfolioItem::COLLECTION).unwrap();
        let action = AdminAction::SetPortfolioFeatured { id: "pf-investment".to_string(), featured: true };
        let outcome = perform(&backend, &data, &action).await;

        assert!(!outcome.applied);
        assert!(outcome.notice.is_error());
        assert_eq!(outcome.notice.description, "Failed to update portfolio item.");
        assert_eq!(*data.borrow(), before);
        assert_eq!(backend.list_calls(PortfolioItem::COLLECTION), 1);
    }

    #[tokio::test]
    async fn test_failed_status_write_keeps_stored_status() {
        let backend = signed_in_admin();
        let data = loaded(&backend).await;
        let stored = data.borrow().queries.items().iter().find(|q| q.id == "cq-erp").map(|q| q.status);

        backend.fail(ContactQuery::COLLECTION).unwrap();
        let action = AdminAction::SetQueryStatus { id: "cq-erp".to_string(), status: QueryStatus::Resolved, note: None };
        let outcome = perform(&backend, &data, &action).await;

        // Not applied: the row's control goes back to the stored status
        assert!(!outcome.applied);
        assert_ne!(stored, Some(QueryStatus::Resolved));
        let shown = data.borrow().queries.items().iter().find(|q| q.id == "cq-erp").map(|q| q.status);
        assert_eq!(shown, stored);
    }

    #[tokio::test]
    async fn test_status_update_keeps_note_when_absent() {
        let backend = signed_in_admin();
        let data = RefCell::new(AdminData::default());

        let with_note = AdminAction::SetQueryStatus {
            id: "cq-erp".to_string(),
            status: QueryStatus::InProgress,
            note: Some("Call scheduled".to_string()),
        };
        perform(&backend, &data, &with_note).await;
        let without_note = AdminAction::SetQueryStatus { id: "cq-erp".to_string(), status: QueryStatus::Resolved, note: None };
        perform(&backend, &data, &without_note).await;

        let query = data.borrow().queries.items().iter().find(|q| q.id == "cq-erp").cloned().unwrap();
        assert_eq!(query.status, QueryStatus::Resolved);
        assert_eq!(query.admin_notes.as_deref(), Some("Call scheduled"));
    }

    #[tokio::test]
    async fn test_unknown_record_reports_failure() {
        let backend = signed_in_admin();
        let action = AdminAction::SetArticlePublished { id: "missing".to_string(), published: false };
        assert!(matches!(action.execute(&backend).await, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_stats_count_states() {
        let mut data = AdminData::default();
        data.queries.settle(Ok(seed::contact_queries()));
        data.articles.settle(Ok(seed::news_articles()));
        data.portfolio.settle(Ok(seed::portfolio_items()));

        let stats = data.stats();
        assert_eq!(stats.total_queries, 3);
        assert_eq!(stats.pending_queries, 1);
        assert_eq!(stats.published_articles, 4);
        assert_eq!(stats.draft_articles, 1);
        assert_eq!(stats.portfolio_items, 6);
        assert_eq!(stats.featured_items, 2);
    }

    #[test]
    fn test_resolve_refetches_only_on_success() {
        let action = AdminAction::SetPortfolioFeatured { id: "pf-risk-platform".to_string(), featured: true };

        let (refetch, notice) = action.resolve(&Ok(()));
        assert_eq!(refetch, Some(AdminTab::Portfolio));
        assert_eq!(notice.description, "Portfolio item featured successfully.");

        let (refetch, notice) = action.resolve(&Err(DomainError::Network("offline".to_string())));
        assert_eq!(refetch, None);
        assert!(notice.is_error());
    }
}
