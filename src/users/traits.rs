//! Trait abstraction for the users endpoint to enable mocking in tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One record returned by the users endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Why a users fetch produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("endpoint returned HTTP {0}")]
    Status(u16),
    #[error("could not decode users: {0}")]
    Decode(String),
    #[error("fetch task ended without a result")]
    Dropped,
}

/// Source of user records, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Read the full user list once
    async fn list_users(&self) -> Result<Vec<User>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ignores_extra_fields() {
        let json = r#"{"id": 1, "name": "Ann", "email": "a@x.com", "phone": "555"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(
            user,
            User {
                id: 1,
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
            }
        );
    }

    #[test]
    fn test_user_requires_email() {
        let json = r#"{"id": 1, "name": "Ann"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(503).to_string(), "endpoint returned HTTP 503");
        assert_eq!(
            FetchError::Decode("eof".to_string()).to_string(),
            "could not decode users: eof"
        );
    }
}
