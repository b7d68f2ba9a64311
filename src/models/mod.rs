//! Data models for VisitorData

pub mod visitor;

// Re-export commonly used types
pub use visitor::{RegisterResponse, RegisterVisitor, Visitor};
