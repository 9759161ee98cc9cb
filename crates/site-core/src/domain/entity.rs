//! Domain Layer - Core Entity Traits
//!
//! Every record the site reads from the backend has an opaque string id and
//! belongs to exactly one named collection.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// An entity stored in a named backend collection
pub trait Record: Entity + Serialize + DeserializeOwned + 'static {
    /// Backend collection (table) name
    const COLLECTION: &'static str;

    /// Partial update accepted by `update_by_id`
    type Patch: Serialize + Clone + 'static;
}

/// Content that can be filtered by category
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Unauthorized(String),
    /// The backend answered with an error status
    Backend { status: u16, message: String },
    /// The request never produced a response
    Network(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            DomainError::Backend { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            DomainError::Network(msg) => write!(f, "Network error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DomainError::Backend {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None if err.is_decode() => DomainError::Internal(err.to_string()),
            None => DomainError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Internal(format!("JSON: {}", err))
    }
}
