//! Visitor registration service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{RegisterVisitor, Visitor},
    repository::Repository,
};

/// Client-facing message for a submission missing a required field
const MISSING_FIELDS: &str = "Name and reason are required.";

/// Reject submissions missing a name or reason. Absent and empty fields are
/// treated the same; photo and signature are never validated beyond presence.
fn validate_submission(data: &RegisterVisitor) -> AppResult<()> {
    data.validate()
        .map_err(|_| AppError::Validation(MISSING_FIELDS.to_string()))
}

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and persist one visitor submission
    pub async fn register(&self, data: &RegisterVisitor) -> AppResult<Visitor> {
        validate_submission(data)?;

        if data.photo.as_deref().unwrap_or("").is_empty() {
            tracing::warn!("Visitor photo not received");
        }
        if data.signature.as_deref().unwrap_or("").is_empty() {
            tracing::warn!("Visitor signature not received");
        }

        self.repository.visitors.insert(data).await
    }

    /// Check that the store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.visitors.ping().await
    }
}
