//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session controller and
//! external systems. Each port is a trait implemented by an adapter
//! in the infrastructure layer, or by a fake in tests.

mod clock;
mod identity_gateway;
mod notifier;
mod ui_surface;

pub use clock::Clock;
pub use identity_gateway::IdentityGateway;
pub use notifier::Notifier;
pub use ui_surface::{UiElement, UiSurface};
