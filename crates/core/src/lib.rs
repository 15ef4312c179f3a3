//! Core business logic for Pocketbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached only through the async traits in [`ports`], injected into
//! each service as `Arc<dyn ...>`.
//!
//! # Modules
//!
//! - `ledger` - Signed transaction records, validation, owner-scoped CRUD
//! - `analytics` - Monthly and per-category buckets over a user's ledger
//! - `identity` - Registration, credential checks, sessions
//! - `category` - System-default and user categories
//! - `ports` - Storage traits implemented by adapters
//! - `memory` - In-process adapter used for tests and local runs

pub mod analytics;
pub mod category;
pub mod identity;
pub mod ledger;
pub mod memory;
pub mod ports;

pub use analytics::AnalyticsService;
pub use category::CategoryService;
pub use identity::IdentityService;
pub use ledger::LedgerService;
pub use memory::InMemoryStore;
pub use ports::StoreError;
