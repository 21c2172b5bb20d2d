//! Identity provider registry.
//!
//! The set of supported providers is fixed at three entries whose
//! order matters: when the SDK reports several linked identities, the
//! first registry entry that matches is treated as the active one.

use serde::{Deserialize, Serialize};

/// Identity of a supported provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    /// Google (`google.com`).
    Google,
    /// Microsoft (`microsoft.com`).
    Microsoft,
    /// GitHub (`github.com`).
    Github,
}

impl ProviderId {
    /// Returns the registry entry for this provider.
    #[must_use]
    pub const fn descriptor(self) -> &'static Provider {
        ProviderRegistry::get(self)
    }
}

/// A supported identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider {
    /// Stable identity.
    pub id: ProviderId,
    /// Human-readable name used in button labels and messages.
    pub display_name: &'static str,
    /// The SDK-side provider key (`providerId` in linked-identity records).
    pub provider_key: &'static str,
    /// Scope requested when opening the sign-in popup.
    pub required_scope: &'static str,
}

/// The fixed, ordered provider registry.
///
/// Order is the tie-break for deriving the active provider and the
/// iteration order for button rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderRegistry;

const PROVIDERS: [Provider; 3] = [
    Provider {
        id: ProviderId::Google,
        display_name: "Google",
        provider_key: "google.com",
        required_scope: "https://www.googleapis.com/auth/userinfo.email",
    },
    Provider {
        id: ProviderId::Microsoft,
        display_name: "Microsoft",
        provider_key: "microsoft.com",
        required_scope: "User.Read",
    },
    Provider {
        id: ProviderId::Github,
        display_name: "GitHub",
        provider_key: "github.com",
        required_scope: "read:user",
    },
];

impl ProviderRegistry {
    /// Returns every supported provider in registry order.
    #[must_use]
    pub const fn all() -> &'static [Provider; 3] {
        &PROVIDERS
    }

    /// Returns the entry for a given provider id.
    #[must_use]
    pub const fn get(id: ProviderId) -> &'static Provider {
        match id {
            ProviderId::Google => &PROVIDERS[0],
            ProviderId::Microsoft => &PROVIDERS[1],
            ProviderId::Github => &PROVIDERS[2],
        }
    }

    /// Derives the active provider from the linked-identity keys the
    /// SDK reports for a user.
    ///
    /// The first registry entry whose `provider_key` appears in `keys`
    /// wins, so `google.com` beats `github.com` regardless of the
    /// order the SDK lists them in. Returns `None` when no linked
    /// identity matches the registry.
    #[must_use]
    pub fn active_provider<S: AsRef<str>>(keys: &[S]) -> Option<ProviderId> {
        PROVIDERS
            .iter()
            .find(|p| keys.iter().any(|k| k.as_ref() == p.provider_key))
            .map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registry_order_is_fixed() {
        let ids: Vec<ProviderId> = ProviderRegistry::all().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![ProviderId::Google, ProviderId::Microsoft, ProviderId::Github]
        );
    }

    #[test]
    fn test_descriptor_lookup() {
        let github = ProviderId::Github.descriptor();
        assert_eq!(github.display_name, "GitHub");
        assert_eq!(github.provider_key, "github.com");
        assert_eq!(github.required_scope, "read:user");
    }

    #[test]
    fn test_active_provider_registry_order_tie_break() {
        // The SDK may list linked identities in any order.
        let keys = ["github.com", "google.com"];
        assert_eq!(
            ProviderRegistry::active_provider(&keys),
            Some(ProviderId::Google)
        );

        let keys = ["google.com", "github.com"];
        assert_eq!(
            ProviderRegistry::active_provider(&keys),
            Some(ProviderId::Google)
        );
    }

    #[test]
    fn test_active_provider_single_match() {
        let keys = ["microsoft.com"];
        assert_eq!(
            ProviderRegistry::active_provider(&keys),
            Some(ProviderId::Microsoft)
        );
    }

    #[test]
    fn test_active_provider_no_match() {
        let keys = ["password", "phone"];
        assert_eq!(ProviderRegistry::active_provider(&keys), None);
    }
}
