//! Portico Infrastructure - Adapters
//!
//! Concrete implementations of the application layer's ports: the
//! system clock, an in-memory UI surface, a simulated identity
//! gateway, and environment-based configuration loading.

pub mod adapters;
pub mod config;
pub mod gateway;

pub use adapters::{ElementState, MemoryUi, SystemClock};
pub use config::load_identity_config;
pub use gateway::SimulatedGateway;
