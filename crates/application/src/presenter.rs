//! Pure projection of session state onto the UI surface.
//!
//! `render` has no knowledge of *why* a state changed and leaves no
//! branching to the caller. Every write is absolute, so rendering the
//! same state twice changes nothing after the first call; the
//! controller relies on that when the click continuation and the
//! auth-state stream both fire for one login.

use portico_domain::{Provider, ProviderRegistry, SessionState};

use crate::ports::{UiElement, UiSurface};

/// Button label while the identity configuration is missing.
pub const CONFIG_MISSING_LABEL: &str = "Configuración no encontrada";

/// Label of an idle provider button.
#[must_use]
pub fn sign_in_label(provider: &Provider) -> String {
    format!("Ingresar con {}", provider.display_name)
}

/// Label of the active provider's button while signed in.
#[must_use]
pub fn sign_out_label(provider: &Provider) -> String {
    format!("Cerrar cuenta de {}", provider.display_name)
}

/// Projects a session state onto the UI surface.
pub fn render(ui: &dyn UiSurface, state: &SessionState) {
    match state {
        SessionState::Unauthenticated => {
            ui.set_visible(UiElement::LoggedOut, true);
            ui.set_visible(UiElement::LoggedIn, false);
            ui.set_visible(UiElement::TokenFormContainer, false);
            for provider in ProviderRegistry::all() {
                let button = UiElement::SignWithButton(provider.id);
                ui.set_text(button, &sign_in_label(provider));
                ui.set_enabled(button, true);
                ui.set_visible(button, true);
            }
            ui.set_visible(UiElement::SignWithContainer, true);
        }

        SessionState::Pending { provider } => {
            ui.set_visible(UiElement::LoggedOut, true);
            ui.set_visible(UiElement::LoggedIn, false);
            ui.set_visible(UiElement::TokenFormContainer, false);
            for entry in ProviderRegistry::all() {
                let button = UiElement::SignWithButton(entry.id);
                if entry.id == *provider {
                    // Text stays untouched while the popup is open.
                    ui.set_enabled(button, false);
                    ui.set_visible(button, true);
                } else {
                    ui.set_enabled(button, false);
                    ui.set_visible(button, false);
                }
            }
        }

        SessionState::Authenticated {
            active_provider,
            display_name,
            email,
            token,
        } => {
            let greeting = display_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or("Usuario");
            ui.set_text(UiElement::Greeting, greeting);
            ui.set_visible(UiElement::LoggedOut, false);
            ui.set_visible(UiElement::LoggedIn, true);
            ui.set_value(UiElement::IdentityInput, email);
            ui.set_value(UiElement::TokenInput, token.as_deref().unwrap_or(""));
            for entry in ProviderRegistry::all() {
                let button = UiElement::SignWithButton(entry.id);
                if Some(entry.id) == *active_provider {
                    ui.set_text(button, &sign_out_label(entry));
                    ui.set_enabled(button, true);
                    ui.set_visible(button, true);
                } else {
                    ui.set_enabled(button, false);
                    ui.set_visible(button, false);
                }
            }
            ui.set_visible(UiElement::TokenFormContainer, true);
        }
    }
}

/// Startup projection when no identity configuration was supplied:
/// every provider button disabled with an explanatory label. The
/// controller never renders anything else afterwards.
pub fn render_config_missing(ui: &dyn UiSurface) {
    for provider in ProviderRegistry::all() {
        let button = UiElement::SignWithButton(provider.id);
        ui.set_text(button, CONFIG_MISSING_LABEL);
        ui.set_enabled(button, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingUi;
    use portico_domain::{AuthUser, ProviderId};
    use pretty_assertions::assert_eq;

    fn authenticated_ana() -> SessionState {
        SessionState::authenticated(&AuthUser {
            display_name: Some("Ana".to_string()),
            email: "ana@x.com".to_string(),
            provider_keys: vec!["google.com".to_string()],
        })
    }

    #[test]
    fn test_render_unauthenticated() {
        let ui = RecordingUi::default();
        render(&ui, &SessionState::Unauthenticated);

        assert_eq!(ui.visible(UiElement::LoggedOut), Some(true));
        assert_eq!(ui.visible(UiElement::TokenFormContainer), Some(false));
        for provider in ProviderRegistry::all() {
            let button = UiElement::SignWithButton(provider.id);
            assert_eq!(
                ui.text(button),
                Some(format!("Ingresar con {}", provider.display_name))
            );
            assert_eq!(ui.enabled(button), Some(true));
            assert_eq!(ui.visible(button), Some(true));
        }
    }

    #[test]
    fn test_render_pending_disables_siblings_and_keeps_text() {
        let ui = RecordingUi::default();
        render(&ui, &SessionState::Unauthenticated);
        render(
            &ui,
            &SessionState::Pending {
                provider: ProviderId::Microsoft,
            },
        );

        let microsoft = UiElement::SignWithButton(ProviderId::Microsoft);
        assert_eq!(ui.text(microsoft), Some("Ingresar con Microsoft".to_string()));
        assert_eq!(ui.enabled(microsoft), Some(false));
        assert_eq!(ui.visible(microsoft), Some(true));

        for other in [ProviderId::Google, ProviderId::Github] {
            let button = UiElement::SignWithButton(other);
            assert_eq!(ui.visible(button), Some(false));
            assert_eq!(ui.enabled(button), Some(false));
        }
    }

    #[test]
    fn test_render_authenticated() {
        let ui = RecordingUi::default();
        let mut state = authenticated_ana();
        render(&ui, &state);

        assert_eq!(ui.text(UiElement::Greeting), Some("Ana".to_string()));
        assert_eq!(ui.value(UiElement::IdentityInput), Some("ana@x.com".to_string()));
        assert_eq!(ui.value(UiElement::TokenInput), Some(String::new()));
        assert_eq!(ui.visible(UiElement::TokenFormContainer), Some(true));

        let google = UiElement::SignWithButton(ProviderId::Google);
        assert_eq!(ui.text(google), Some("Cerrar cuenta de Google".to_string()));
        assert_eq!(ui.enabled(google), Some(true));
        assert_eq!(ui.visible(UiElement::SignWithButton(ProviderId::Microsoft)), Some(false));
        assert_eq!(ui.visible(UiElement::SignWithButton(ProviderId::Github)), Some(false));

        // Token resolves later; only the field value changes.
        if let SessionState::Authenticated { token, .. } = &mut state {
            *token = Some("abc123".to_string());
        }
        render(&ui, &state);
        assert_eq!(ui.value(UiElement::TokenInput), Some("abc123".to_string()));
    }

    #[test]
    fn test_render_authenticated_without_registry_match_hides_all_buttons() {
        let ui = RecordingUi::default();
        let state = SessionState::authenticated(&AuthUser {
            display_name: None,
            email: "ana@x.com".to_string(),
            provider_keys: vec!["password".to_string()],
        });
        render(&ui, &state);

        assert_eq!(ui.text(UiElement::Greeting), Some("Usuario".to_string()));
        for provider in ProviderRegistry::all() {
            assert_eq!(ui.visible(UiElement::SignWithButton(provider.id)), Some(false));
        }
        assert_eq!(ui.visible(UiElement::TokenFormContainer), Some(true));
    }

    #[test]
    fn test_render_is_idempotent_for_every_state() {
        let states = [
            SessionState::Unauthenticated,
            SessionState::Pending {
                provider: ProviderId::Google,
            },
            authenticated_ana(),
        ];

        for state in states {
            let ui = RecordingUi::default();
            render(&ui, &state);
            let after_first = ui.effective_mutations();
            render(&ui, &state);
            assert_eq!(
                ui.effective_mutations(),
                after_first,
                "second render of {state:?} mutated the surface"
            );
        }
    }

    #[test]
    fn test_render_config_missing() {
        let ui = RecordingUi::default();
        render_config_missing(&ui);

        for provider in ProviderRegistry::all() {
            let button = UiElement::SignWithButton(provider.id);
            assert_eq!(ui.text(button), Some(CONFIG_MISSING_LABEL.to_string()));
            assert_eq!(ui.enabled(button), Some(false));
        }
    }
}
