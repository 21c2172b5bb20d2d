//! Session state types.
//!
//! This module defines the state machine's data: what the controller
//! currently believes about the user's session. Transitions live in
//! the application layer; these types only carry the facts.

use serde::{Deserialize, Serialize};

use crate::provider::{ProviderId, ProviderRegistry};

/// The user record reported by the identity SDK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Display name, absent for some providers.
    pub display_name: Option<String>,
    /// Primary email of the session's user record.
    pub email: String,
    /// Provider keys of the linked identities (`providerId` values).
    pub provider_keys: Vec<String>,
}

impl AuthUser {
    /// Greeting name with the literal fallback used when the provider
    /// reports no display name.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Usuario",
        }
    }
}

/// The controller's current belief about the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No user signed in.
    #[default]
    Unauthenticated,

    /// A sign-in popup is open for one provider; every other control
    /// is disabled for the duration.
    Pending {
        /// The provider whose popup is open.
        provider: ProviderId,
    },

    /// A user is signed in.
    Authenticated {
        /// First registry-order match over the linked identities.
        /// `None` when the session was established through a provider
        /// outside the registry.
        active_provider: Option<ProviderId>,
        /// Display name as reported by the SDK.
        display_name: Option<String>,
        /// Email forwarded to the identity form.
        email: String,
        /// Short-lived identity token, filled once the asynchronous
        /// fetch resolves. Stays `None` if the fetch fails.
        token: Option<String>,
    },
}

impl SessionState {
    /// Builds the authenticated state for a user record, deriving the
    /// active provider in registry order. The token starts empty.
    #[must_use]
    pub fn authenticated(user: &AuthUser) -> Self {
        Self::Authenticated {
            active_provider: ProviderRegistry::active_provider(&user.provider_keys),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            token: None,
        }
    }

    /// Returns true if a sign-in attempt is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Returns true if a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The provider whose button acts as a sign-out control, if any.
    #[must_use]
    pub const fn active_provider(&self) -> Option<ProviderId> {
        match self {
            Self::Authenticated {
                active_provider, ..
            } => *active_provider,
            Self::Unauthenticated | Self::Pending { .. } => None,
        }
    }
}
