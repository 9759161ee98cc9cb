//! Admin Dashboard Components

mod stats;
mod queries;
mod articles;
mod portfolio;

pub use stats::AdminStatsCards;
pub use queries::QueriesTable;
pub use articles::ArticlesTable;
pub use portfolio::PortfolioTable;
