//! Simulated identity gateway.
//!
//! Plays the role of the identity SDK for the demo binary and the
//! integration tests: a scripted user record, a canned token, an
//! optional one-shot failure, and the out-of-band auth-state stream
//! the real SDK would drive.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use portico_application::ports::IdentityGateway;
use portico_domain::{AuthUser, Provider, SignInError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Scripted `IdentityGateway`.
#[derive(Debug)]
pub struct SimulatedGateway {
    user: AuthUser,
    token: String,
    next_sign_in_failure: Mutex<Option<SignInError>>,
    events: Mutex<Option<UnboundedSender<Option<AuthUser>>>>,
}

impl SimulatedGateway {
    /// Creates a gateway that signs in the given user and issues the
    /// given identity token.
    #[must_use]
    pub fn new(user: AuthUser, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
            next_sign_in_failure: Mutex::new(None),
            events: Mutex::new(None),
        }
    }

    /// Subscribes to the auth-state stream. Sign-in success emits the
    /// user record, sign-out emits `None`, mirroring the SDK's
    /// subscription. Only the latest subscriber receives events.
    pub fn subscribe(&self) -> UnboundedReceiver<Option<AuthUser>> {
        let (tx, rx) = mpsc::unbounded_channel();
        *lock(&self.events) = Some(tx);
        rx
    }

    /// Scripts the next sign-in attempt to fail with the given error.
    pub fn fail_next_sign_in(&self, error: SignInError) {
        *lock(&self.next_sign_in_failure) = Some(error);
    }

    fn emit(&self, event: Option<AuthUser>) {
        if let Some(tx) = lock(&self.events).as_ref() {
            // A dropped subscriber is not an error for the gateway.
            let _ = tx.send(event);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl IdentityGateway for SimulatedGateway {
    async fn sign_in_with_popup(&self, provider: &Provider) -> Result<AuthUser, SignInError> {
        tracing::debug!(
            provider = provider.display_name,
            scope = provider.required_scope,
            "simulated popup opened"
        );
        if let Some(error) = lock(&self.next_sign_in_failure).take() {
            return Err(error);
        }
        self.emit(Some(self.user.clone()));
        Ok(self.user.clone())
    }

    async fn sign_out(&self) -> Result<(), SignInError> {
        self.emit(None);
        Ok(())
    }

    async fn fetch_id_token(&self) -> Result<String, SignInError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_domain::{ProviderId, ProviderRegistry};
    use pretty_assertions::assert_eq;

    fn ana() -> AuthUser {
        AuthUser {
            display_name: Some("Ana".to_string()),
            email: "ana@x.com".to_string(),
            provider_keys: vec!["google.com".to_string()],
        }
    }

    #[tokio::test]
    async fn test_sign_in_emits_auth_state_event() {
        let gateway = SimulatedGateway::new(ana(), "abc123");
        let mut events = gateway.subscribe();

        let user = gateway
            .sign_in_with_popup(ProviderRegistry::get(ProviderId::Google))
            .await
            .expect("scripted sign-in succeeds");
        assert_eq!(user.email, "ana@x.com");
        assert_eq!(events.recv().await, Some(Some(ana())));

        gateway.sign_out().await.expect("scripted sign-out succeeds");
        assert_eq!(events.recv().await, Some(None));
    }

    #[tokio::test]
    async fn test_scripted_failure_is_one_shot() {
        let gateway = SimulatedGateway::new(ana(), "abc123");
        gateway.fail_next_sign_in(SignInError::new("auth/popup-blocked", "blocked"));

        let provider = ProviderRegistry::get(ProviderId::Google);
        let err = gateway
            .sign_in_with_popup(provider)
            .await
            .expect_err("first attempt fails");
        assert_eq!(err.code, "auth/popup-blocked");

        assert!(gateway.sign_in_with_popup(provider).await.is_ok());
    }
}
