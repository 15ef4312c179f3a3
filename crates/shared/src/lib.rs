//! Shared types, errors, and configuration for Pocketbook.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - Session token (JWT) handling
//! - Auth request/response payloads

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

#[cfg(test)]
mod jwt_tests;

pub use auth::Claims;
pub use config::{AnalyticsConfig, AppConfig, LedgerConfig, MonthOrder};
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
