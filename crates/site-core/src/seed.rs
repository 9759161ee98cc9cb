//! Demo content for running the site without a hosted backend.

use chrono::{DateTime, Utc};

use crate::domain::{ContactQuery, NewsArticle, PortfolioItem, QueryStatus, Session};
use crate::repository::MemoryBackend;

pub const DEMO_ADMIN_ID: &str = "demo-admin";

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn news_articles() -> Vec<NewsArticle> {
    let article = |id: &str, title: &str, excerpt: &str, content: &str, author: &str, category: &str, date: &str| NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        author_name: author.to_string(),
        category: Some(category.to_string()),
        published: true,
        created_at: at(date),
    };
    let mut articles = vec![
        article(
            "news-digital-trends",
            "Digital Transformation Trends Shaping 2024",
            "Explore the key digital transformation trends that are revolutionizing how businesses operate and compete in the modern marketplace.",
            "The digital landscape continues to evolve at an unprecedented pace, with artificial intelligence, cloud computing, and automation leading the charge. Organizations that embrace these technologies are positioning themselves for sustainable growth and competitive advantage.\n\nOur recent analysis of market trends reveals that companies investing in digital transformation are experiencing **30% higher revenue growth** compared to their traditional counterparts.",
            "Sarah Johnson",
            "Technology",
            "2024-01-15T09:00:00Z",
        ),
        article(
            "news-strategic-planning",
            "Strategic Planning in Uncertain Times",
            "Learn how leading organizations are adapting their strategic planning processes to navigate volatility and maintain growth momentum.",
            "In today's rapidly changing business environment, traditional strategic planning approaches are being challenged. Organizations must develop more agile, responsive strategies that can adapt to unexpected market shifts.\n\nOur consultants have identified five key principles that successful companies are using to maintain strategic focus while remaining flexible enough to pivot when necessary.",
            "Michael Chen",
            "Strategy",
            "2024-01-10T09:00:00Z",
        ),
        article(
            "news-sustainability",
            "Sustainable Business Practices Drive Innovation",
            "Discover how sustainability initiatives are not just good for the planet, but are also driving innovation and competitive advantage.",
            "Sustainability is no longer just a corporate responsibility initiative. It has become a key driver of innovation and business value. Companies that integrate environmental and social considerations into their core business strategies are discovering new opportunities for growth, cost reduction, and stakeholder engagement.\n\nOur research shows that sustainable businesses are **25% more likely** to outperform their peers in long-term profitability.",
            "Emma Davis",
            "Sustainability",
            "2024-01-05T09:00:00Z",
        ),
        article(
            "news-remote-work",
            "The Future of Remote Work and Collaboration",
            "Insights into how the workplace is evolving and what organizations need to do to succeed in the hybrid work environment.",
            "The shift to remote and hybrid work models has fundamentally changed how organizations operate. Companies that successfully navigate this transition are investing in digital collaboration tools, reimagining their office spaces, and developing new management approaches.\n\nOrganizations with strong remote work capabilities are experiencing 20% higher employee satisfaction and 15% lower turnover rates.",
            "David Thompson",
            "Human Resources",
            "2023-12-28T09:00:00Z",
        ),
    ];
    let mut draft = article(
        "news-draft-outlook",
        "2025 Market Outlook",
        "A first look at the forces shaping next year's planning cycle.",
        "Draft in progress.",
        "Sarah Johnson",
        "Strategy",
        "2024-02-01T09:00:00Z",
    );
    draft.published = false;
    articles.push(draft);
    articles
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    let item = |id: &str, title: &str, category: &str, description: &str, tags: &[&str], results: &[&str], date: &str| PortfolioItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        technologies: strings(tags),
        results: strings(results),
        featured: false,
        created_at: at(date),
    };
    let mut items = vec![
        item(
            "pf-manufacturing",
            "Global Manufacturing Optimization",
            "consulting",
            "Comprehensive operational restructuring for a Fortune 500 manufacturing company, resulting in 30% efficiency improvement.",
            &["Strategy", "Operations", "Manufacturing"],
            &["30% efficiency increase", "$2M annual savings", "6-month implementation"],
            "2023-09-01T00:00:00Z",
        ),
        item(
            "pf-risk-platform",
            "Financial Risk Assessment Platform",
            "finance",
            "Development of advanced risk assessment framework for multinational investment firm with real-time monitoring capabilities.",
            &["Risk Management", "Finance", "Analytics"],
            &["50% faster risk assessment", "Real-time monitoring", "Regulatory compliance"],
            "2023-07-01T00:00:00Z",
        ),
        item(
            "pf-digital-retail",
            "Digital Transformation Initiative",
            "technology",
            "Complete digital overhaul for traditional retail chain, including e-commerce platform and inventory management system.",
            &["Digital", "E-commerce", "Retail"],
            &["200% online sales growth", "Integrated systems", "Mobile-first approach"],
            "2022-11-01T00:00:00Z",
        ),
        item(
            "pf-supply-chain",
            "Supply Chain Optimization",
            "operations",
            "End-to-end supply chain redesign for pharmaceutical company, improving delivery times and reducing costs.",
            &["Supply Chain", "Logistics", "Healthcare"],
            &["40% faster delivery", "25% cost reduction", "Quality improvements"],
            "2023-04-01T00:00:00Z",
        ),
        item(
            "pf-restructuring",
            "Corporate Restructuring Strategy",
            "consulting",
            "Strategic reorganization of multinational corporation to improve efficiency and market responsiveness.",
            &["Strategy", "Restructuring", "Change Management"],
            &["Streamlined operations", "Improved agility", "Cost optimization"],
            "2022-06-01T00:00:00Z",
        ),
        item(
            "pf-investment",
            "Investment Portfolio Analysis",
            "finance",
            "Comprehensive portfolio optimization for institutional investor, balancing risk and return objectives.",
            &["Investment", "Portfolio", "Analytics"],
            &["15% return improvement", "Risk reduction", "Diversified holdings"],
            "2023-02-01T00:00:00Z",
        ),
    ];
    items[0].featured = true;
    items[2].featured = true;
    items
}

pub fn contact_queries() -> Vec<ContactQuery> {
    let query = |id: &str, name: &str, email: &str, subject: &str, message: &str, status: QueryStatus, date: &str| ContactQuery {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
        status,
        admin_notes: None,
        created_at: at(date),
    };
    vec![
        query(
            "cq-erp",
            "Laura Mills",
            "laura.mills@example.com",
            "ERP migration assessment",
            "We are planning to replace our ERP next year and would like an independent assessment.",
            QueryStatus::Pending,
            "2024-02-03T14:20:00Z",
        ),
        query(
            "cq-risk",
            "Omar Haddad",
            "omar@example.org",
            "Risk framework review",
            "Could your team review our current risk framework ahead of the audit?",
            QueryStatus::InProgress,
            "2024-01-29T10:05:00Z",
        ),
        query(
            "cq-speaking",
            "Priya Nair",
            "priya.nair@example.net",
            "Conference speaking invitation",
            "We would love to have one of your partners speak at our operations summit.",
            QueryStatus::Resolved,
            "2024-01-12T16:45:00Z",
        ),
    ]
}

/// In-memory backend holding the demo content, signed in as a demo admin
pub fn demo_backend() -> MemoryBackend {
    let backend = MemoryBackend::new();
    let seeded = backend
        .insert(&news_articles())
        .and_then(|_| backend.insert(&portfolio_items()))
        .and_then(|_| backend.insert(&contact_queries()))
        .and_then(|_| backend.set_session(Some(Session::new(DEMO_ADMIN_ID, Some("admin@procorp.com".to_string())))))
        .and_then(|_| backend.grant_admin(DEMO_ADMIN_ID));
    if let Err(e) = seeded {
        log::error!("[seed] failed to seed demo backend: {}", e);
    }
    backend
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;
    use crate::admin::{enter, AdminData, GateState};

    #[test]
    fn test_seed_ids_are_unique() {
        let news: HashSet<_> = news_articles().into_iter().map(|a| a.id).collect();
        let portfolio: HashSet<_> = portfolio_items().into_iter().map(|p| p.id).collect();
        let queries: HashSet<_> = contact_queries().into_iter().map(|q| q.id).collect();
        assert_eq!(news.len(), news_articles().len());
        assert_eq!(portfolio.len(), portfolio_items().len());
        assert_eq!(queries.len(), contact_queries().len());
    }

    #[test]
    fn test_seed_has_a_draft_article() {
        assert!(news_articles().iter().any(|a| !a.published));
    }

    #[tokio::test]
    async fn test_demo_backend_opens_the_dashboard() {
        let backend = demo_backend();
        let data = RefCell::new(AdminData::default());

        assert!(matches!(enter(&backend, &data).await, GateState::Authorized(_)));
        let stats = data.borrow().stats();
        assert_eq!(stats.total_queries, contact_queries().len());
        assert_eq!(stats.portfolio_items, portfolio_items().len());
    }
}
