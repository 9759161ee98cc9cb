//! UI Components
//!
//! Sections of the marketing page, shared chrome, and the admin dashboard.

mod header;
mod hero;
mod about;
mod services;
mod portfolio;
mod news;
mod footer;
mod preloader;
mod toast;
pub mod admin;

pub use header::Header;
pub use hero::Hero;
pub use about::About;
pub use services::Services;
pub use portfolio::Portfolio;
pub use news::News;
pub use footer::Footer;
pub use preloader::Preloader;
pub use toast::ToastHost;
