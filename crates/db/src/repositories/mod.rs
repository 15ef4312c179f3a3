//! Repositories implementing the core storage ports.

mod category;
mod health;
mod session;
mod transaction;
mod user;

pub use category::CategoryRepository;
pub use health::DatabaseHealth;
pub use session::SessionRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;
