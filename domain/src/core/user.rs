//! User identifier value object

use super::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Identifier of a signed-in user (Value Object)
///
/// Every per-user write requires one of these. Construction fails for empty
/// or whitespace-only input so that an anonymous session can never reach the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and wrap a raw session identifier
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingUserId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validate an optional session identifier
    pub fn from_session(session: Option<&str>) -> Result<Self, ValidationError> {
        match session {
            Some(raw) => Self::parse(raw),
            None => Err(ValidationError::MissingUserId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}
