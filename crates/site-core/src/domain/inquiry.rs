//! Contact inquiries submitted through the public contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Record};

/// Processing status of a contact inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl QueryStatus {
    pub const ALL: [QueryStatus; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    /// Wire value, as stored by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Lowercase badge text
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Resolved => "resolved",
        }
    }

    /// Option label in the status picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactQuery {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: QueryStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for ContactQuery {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Status change with an optional admin note.
/// A `None` note leaves the stored one untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPatch {
    pub status: QueryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

impl Record for ContactQuery {
    const COLLECTION: &'static str = "contact_queries";
    type Patch = QueryPatch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&QueryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(QueryStatus::from_str("resolved"), Some(QueryStatus::Resolved));
        assert_eq!(QueryStatus::from_str("closed"), None);
    }

    #[test]
    fn test_patch_without_note_omits_field() {
        let patch = QueryPatch { status: QueryStatus::Resolved, admin_notes: None };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["status"], "resolved");
        assert!(value.get("admin_notes").is_none());
    }
}
