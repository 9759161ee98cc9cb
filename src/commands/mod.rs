//! Backend Command Wrappers
//!
//! Frontend bindings to the backend and browser storage, organized by domain.

mod config;
mod content;
mod session;

// Re-export all public items
pub use config::*;
pub use content::*;
pub use session::*;
