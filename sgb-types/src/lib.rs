//! Shared types for the gradebook service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Query string of `GET /api/v1/sgb/login`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            email: first_value(pairs, "email"),
            password: first_value(pairs, "password"),
        }
    }
}

/// Query string of `GET /api/v1/sgb/student/note`.
///
/// Every field is kept as the raw text sent by the client, so `note=33.33`
/// comes back as `"33.33"`. Missing parameters default to empty strings.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NoteQuery {
    #[serde(default)]
    pub course: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub type_id: String,
    #[serde(default)]
    pub note: String,
}

impl NoteQuery {
    /// Build from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            course: first_value(pairs, "course"),
            kind: first_value(pairs, "type"),
            type_id: first_value(pairs, "type_id"),
            note: first_value(pairs, "note"),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}

// =====================================================
// Response Types
// =====================================================

/// Envelope for every non-login response.
///
/// Success carries `data` (or nothing for mutations), failure carries `error`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(msg.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Success without payload
    pub fn empty() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

/// Body of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// =====================================================
// Domain Types
// =====================================================

/// A note as listed for the student who owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentNote {
    pub course: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_id: String,
    pub note: String,
}

/// A note as listed for a course, across students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseNote {
    pub course: String,
    pub student: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_id: String,
    pub note: String,
}
