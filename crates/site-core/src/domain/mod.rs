//! Domain Layer
//!
//! Entities owned by the backend and the traits that tie them to collections.

mod entity;
mod content;
mod inquiry;
mod session;

pub use entity::{Categorized, DomainError, DomainResult, Entity, Record};
pub use content::{ArticlePatch, CategoryOption, NewsArticle, PortfolioItem, PortfolioPatch, PORTFOLIO_CATEGORIES};
pub use inquiry::{ContactQuery, QueryPatch, QueryStatus};
pub use session::{Session, ADMIN_PROFILES};
