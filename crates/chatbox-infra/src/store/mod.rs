//! In-memory stores backed by `DashMap`.
//!
//! State lives for the process lifetime only; a restart drops all accounts
//! and sessions (no durability goal).

pub mod sessions;
pub mod users;

pub use sessions::InMemorySessionStore;
pub use users::InMemoryCredentialStore;
