//! Pages
//!
//! The public marketing page and the gated admin dashboard.

mod index;
mod admin;

pub use index::IndexPage;
pub use admin::AdminPage;
