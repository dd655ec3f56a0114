//! Authentication: credential storage seams, session lifecycle, and the
//! orchestrating auth service.

pub mod credentials;
pub mod service;
pub mod sessions;

pub use service::AuthService;
pub use sessions::SessionManager;
