//! Visitor record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One persisted check-in entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visitor {
    pub id: Uuid,
    pub name: String,
    /// Stated reason for the visit
    pub reason: String,
    /// Data-URL-encoded photo, empty when the visitor skipped it
    pub photo: String,
    /// Data-URL-encoded signature, empty when the visitor skipped it
    pub signature: String,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Register visitor request
///
/// Absent `name`/`reason` deserialize to the empty string so an absent field
/// is rejected the same way as an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterVisitor {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub reason: String,
    /// Data-URL-encoded photo (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Data-URL-encoded signature (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Registration acknowledgment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
}
