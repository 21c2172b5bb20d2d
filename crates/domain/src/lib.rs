//! Portico Domain - Core sign-in types
//!
//! This crate defines the domain model for the Portico sign-in
//! controller. All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod notice;
pub mod provider;
pub mod session;

pub use config::IdentityConfig;
pub use error::{ErrorCode, SignInError};
pub use notice::{ErrorNotice, NOTICE_TTL};
pub use provider::{Provider, ProviderId, ProviderRegistry};
pub use session::{AuthUser, SessionState};
