//! Authenticated backend session.

use serde::{Deserialize, Serialize};

/// Name of the collection holding one row per admin user
pub const ADMIN_PROFILES: &str = "admin_profiles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, email: Option<String>) -> Self {
        Self { user_id: user_id.into(), email }
    }

    /// Name shown in the admin header
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.user_id)
    }
}
