//! API handlers for VisitorData REST endpoints

pub mod health;
pub mod openapi;
pub mod visitors;
