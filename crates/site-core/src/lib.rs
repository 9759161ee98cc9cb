//! ProCorp Site Core
//!
//! Everything the site does that is not DOM plumbing:
//! - domain: records owned by the backend
//! - repository: backend access (hosted REST, in-memory)
//! - store: remote collection cache with load state
//! - view_state: category filter, expansion and paging
//! - navigation: section order, smooth-scroll targets, header state
//! - reveal: one-way scroll-reveal rules
//! - admin: session gate, managed collections, mutations

pub mod domain;
pub mod repository;
pub mod config;
pub mod store;
pub mod view_state;
pub mod navigation;
pub mod reveal;
pub mod notify;
pub mod admin;
pub mod seed;

pub use config::SiteConfig;
pub use repository::Backend;
