//! HTTP surface: router, handlers, session cookie plumbing, and the error
//! -> response mapping.

pub mod cookie;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
