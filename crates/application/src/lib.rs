//! Portico Application - Session controller and ports
//!
//! This crate owns the session state machine and the pure UI
//! projection. External systems (identity SDK, UI surface, clock)
//! are reached exclusively through the port traits in [`ports`],
//! so the whole layer runs against fakes in tests.

pub mod controller;
pub mod notifier;
pub mod ports;
pub mod presenter;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::SessionController;
pub use notifier::{BannerNotifier, NullNotifier};
pub use ports::{Clock, IdentityGateway, Notifier, UiElement, UiSurface};
