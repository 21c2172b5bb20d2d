//! Identity SDK port.

use async_trait::async_trait;
use portico_domain::{AuthUser, Provider, SignInError};

/// Port to the identity-provider SDK.
///
/// The SDK owns all wire-level behavior: the popup UX, token
/// issuance, and the network round trips behind both. The controller
/// only sees resolved user records and coded failures.
///
/// Out-of-band auth-state notifications are not part of this trait;
/// whoever owns the SDK subscription forwards them to
/// [`crate::SessionController::on_auth_state_changed`].
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Opens the sign-in popup for a provider, requesting its
    /// required scope, and resolves with the signed-in user.
    ///
    /// # Errors
    /// Returns the SDK's coded failure when the popup is closed,
    /// blocked, or the round trip fails.
    async fn sign_in_with_popup(&self, provider: &Provider) -> Result<AuthUser, SignInError>;

    /// Signs the current user out.
    ///
    /// # Errors
    /// Returns the SDK's coded failure when sign-out fails.
    async fn sign_out(&self) -> Result<(), SignInError>;

    /// Fetches a short-lived identity token for the current user.
    ///
    /// # Errors
    /// Returns the SDK's coded failure when the fetch fails; the
    /// controller treats this as non-fatal.
    async fn fetch_id_token(&self) -> Result<String, SignInError>;
}
