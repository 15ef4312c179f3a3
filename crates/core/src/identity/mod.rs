//! User identity and login sessions.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Registration with store-enforced uniqueness
//! - Credential checks that never reveal whether an email exists
//! - Server-side sessions bound to signed tokens

pub mod error;
mod password;
pub mod service;
pub mod session;
pub mod types;
pub mod validation;

pub use error::IdentityError;
pub use password::{
    PasswordError, hash_password, hash_password_blocking, verify_password,
    verify_password_blocking,
};
pub use service::IdentityService;
pub use session::{Session, hash_token};
pub use types::{AuthenticatedUser, LoginOutcome, Registration, User};
