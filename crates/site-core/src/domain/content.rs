//! Published content: news articles and portfolio items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{Categorized, Entity, Record};

/// Words per minute used for the reading-time estimate
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body
    pub content: String,
    pub author_name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl NewsArticle {
    /// Estimated reading time in whole minutes (never zero)
    pub fn read_time_minutes(&self) -> usize {
        let words = self.content.split_whitespace().count();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

impl Entity for NewsArticle {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for NewsArticle {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePatch {
    pub published: bool,
}

impl Record for NewsArticle {
    const COLLECTION: &'static str = "news_articles";
    type Patch = ArticlePatch;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Array columns may be NULL in the table
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entity for PortfolioItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for PortfolioItem {
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPatch {
    pub featured: bool,
}

impl Record for PortfolioItem {
    const COLLECTION: &'static str = "portfolio_items";
    type Patch = PortfolioPatch;
}

/// A filter button: category id plus its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const PORTFOLIO_CATEGORIES: [CategoryOption; 5] = [
    CategoryOption { id: "all", label: "All Projects" },
    CategoryOption { id: "consulting", label: "Consulting" },
    CategoryOption { id: "finance", label: "Finance" },
    CategoryOption { id: "technology", label: "Technology" },
    CategoryOption { id: "operations", label: "Operations" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn article(content: &str) -> NewsArticle {
        NewsArticle {
            id: "a".to_string(),
            title: "Title".to_string(),
            excerpt: String::new(),
            content: content.to_string(),
            author_name: "Sarah Johnson".to_string(),
            category: None,
            published: true,
            created_at: DateTime::default(),
        }
    }

    #[test]
    fn test_read_time_rounds_up() {
        let words = vec!["word"; 201].join(" ");
        assert_eq!(article(&words).read_time_minutes(), 2);
    }

    #[test]
    fn test_read_time_never_zero() {
        assert_eq!(article("").read_time_minutes(), 1);
    }

    #[test]
    fn test_article_from_backend_row() {
        let row = r#"{
            "id": "7b0c",
            "title": "Strategic Planning in Uncertain Times",
            "excerpt": "Learn how...",
            "content": "In today's rapidly changing business environment...",
            "author_name": "Michael Chen",
            "published": false,
            "created_at": "2024-01-10T08:30:00.123456+00:00"
        }"#;
        let parsed: NewsArticle = serde_json::from_str(row).expect("row should parse");
        assert_eq!(parsed.category, None);
        assert!(!parsed.published);
        assert_eq!(parsed.created_at.format("%Y-%m-%d").to_string(), "2024-01-10");
    }

    #[test]
    fn test_portfolio_defaults_missing_lists() {
        let row = r#"{
            "id": "p1",
            "title": "Supply Chain Optimization",
            "description": "End-to-end redesign",
            "category": "operations",
            "featured": true,
            "created_at": "2023-06-01T00:00:00Z"
        }"#;
        let parsed: PortfolioItem = serde_json::from_str(row).expect("row should parse");
        assert!(parsed.technologies.is_empty());
        assert!(parsed.results.is_empty());
        assert_eq!(parsed.category(), Some("operations"));
    }

    #[test]
    fn test_portfolio_null_lists_read_as_empty() {
        let row = r#"{
            "id": "p2",
            "title": "Risk Platform",
            "description": "Realtime exposure dashboard",
            "category": "finance",
            "technologies": null,
            "results": ["40% faster reporting"],
            "featured": false,
            "created_at": "2023-09-01T00:00:00Z"
        }"#;
        let parsed: PortfolioItem = serde_json::from_str(row).expect("row should parse");
        assert!(parsed.technologies.is_empty());
        assert_eq!(parsed.results, vec!["40% faster reporting".to_string()]);
    }
}
