//! VisitorData - Visitor Check-in System
//!
//! A Rust implementation of the visitor check-in service: a REST JSON API
//! that validates and persists visitor registrations, plus the typed state
//! model driving the capture-form client.

use std::sync::Arc;

pub mod api;
pub mod capture;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
