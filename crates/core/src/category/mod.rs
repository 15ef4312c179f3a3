//! Category registry.
//!
//! System defaults (no owner) are seeded by an idempotent upsert; users add
//! their own at runtime. Transactions reference categories by label only.

pub mod defaults;
pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use defaults::default_categories;
pub use error::CategoryError;
pub use service::CategoryService;
pub use types::{Category, NewCategory};
