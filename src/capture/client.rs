//! HTTP submission client for the registration endpoint

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::visitor::RegisterVisitor;

/// Submission failures, all carrying human-readable text for the form notice
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The endpoint rejected the submission (missing required fields)
    #[error("{message}")]
    Rejected { message: String },

    /// The endpoint failed to persist the submission
    #[error("{message}")]
    Failed {
        message: String,
        detail: Option<String>,
    },

    /// The request never reached or never returned from the endpoint
    #[error("Server error. Please try again later.")]
    Transport(#[from] reqwest::Error),
}

/// Registration endpoint abstraction; mocked in form tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit one visitor payload; returns the server confirmation message
    async fn register(&self, visitor: &RegisterVisitor) -> Result<String, RegistrationError>;
}

/// Acknowledgment body shared by success and error responses
#[derive(Deserialize)]
struct Acknowledgment {
    message: String,
    #[serde(default)]
    error: Option<String>,
}

/// Production client speaking JSON over HTTP
pub struct HttpRegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationClient {
    async fn register(&self, visitor: &RegisterVisitor) -> Result<String, RegistrationError> {
        let response = self
            .http
            .post(format!("{}/api/visitors", self.base_url))
            .json(visitor)
            .send()
            .await?;

        let status = response.status();
        let ack: Acknowledgment = response.json().await?;

        if status.is_success() {
            Ok(ack.message)
        } else if status.is_client_error() {
            Err(RegistrationError::Rejected {
                message: ack.message,
            })
        } else {
            Err(RegistrationError::Failed {
                message: ack.message,
                detail: ack.error,
            })
        }
    }
}
