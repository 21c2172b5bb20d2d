//! Notifier capability.

use async_trait::async_trait;

/// Capability for surfacing sign-in failures to the user.
///
/// The controller composes with any implementation: the banner
/// notifier in this crate, or a no-op one when no banner surface
/// exists. Implementations must always log the raw error regardless
/// of whether anything is displayed.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Classifies and surfaces a provider failure.
    async fn notify(&self, provider_display_name: &str, code: &str, raw_message: &str);

    /// Hides any visible notice and cancels its expiry. Idempotent.
    async fn dismiss(&self);
}
