//! The session state machine.
//!
//! `SessionController` owns the current [`SessionState`] and mediates
//! every sign-in and sign-out attempt against the identity gateway.
//! All collaborators arrive through its constructor, and no SDK
//! failure ever propagates past a click handler or the auth-state
//! subscription.

use std::sync::Arc;

use portico_domain::{AuthUser, IdentityConfig, ProviderId, SessionState};
use tokio::sync::Mutex;

use crate::ports::{IdentityGateway, Notifier, UiSurface};
use crate::presenter;

/// Outcome of the click guard, decided under the state lock.
enum ClickAction {
    SignIn,
    SignOut,
    Ignore,
}

/// The authentication-session controller.
///
/// Cheap to clone; clones share the same state. Transitions are
/// driven only by user clicks ([`Self::handle_click`]) and the SDK's
/// auth-state stream ([`Self::on_auth_state_changed`]). The stream is
/// the source of truth for "is a user signed in"; a click's own
/// success continuation funnels through the same apply path, and the
/// idempotent render makes the arrival order irrelevant.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<SessionState>,
    gateway: Arc<dyn IdentityGateway>,
    ui: Arc<dyn UiSurface>,
    notifier: Arc<dyn Notifier>,
    /// Set when no identity configuration was supplied at startup.
    /// An inert controller renders the explanatory labels once and
    /// ignores every event for the page's lifetime.
    inert: bool,
}

impl SessionController {
    /// Builds the controller and performs the startup rendering.
    ///
    /// With a configuration present, the buttons render in their
    /// enabled sign-in state. With `None` the controller enters the
    /// inert configuration-missing mode: every button disabled with
    /// the literal "Configuración no encontrada", and every later
    /// click or auth-state event is a no-op.
    #[must_use]
    pub fn bootstrap(
        config: Option<&IdentityConfig>,
        gateway: Arc<dyn IdentityGateway>,
        ui: Arc<dyn UiSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let inert = config.is_none();
        if inert {
            tracing::warn!("identity configuration missing; sign-in is disabled");
            presenter::render_config_missing(ui.as_ref());
        } else {
            presenter::render(ui.as_ref(), &SessionState::Unauthenticated);
        }
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(SessionState::Unauthenticated),
                gateway,
                ui,
                notifier,
                inert,
            }),
        }
    }

    /// Whether the controller is in the configuration-missing mode.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.inner.inert
    }

    /// A copy of the current session state.
    pub async fn state(&self) -> SessionState {
        self.inner.state.lock().await.clone()
    }

    /// Handles a click on a provider's button.
    ///
    /// The UI disables unusable buttons, but stale events can still
    /// arrive, so the guard here is authoritative: a click is only
    /// acted on from `Unauthenticated` (sign-in) or from
    /// `Authenticated` on the active provider's own button (sign-out).
    pub async fn handle_click(&self, provider: ProviderId) {
        if self.inner.inert {
            return;
        }

        let action = {
            let mut state = self.inner.state.lock().await;
            let action = match &*state {
                SessionState::Unauthenticated => ClickAction::SignIn,
                SessionState::Authenticated {
                    active_provider: Some(active),
                    ..
                } if *active == provider => ClickAction::SignOut,
                _ => ClickAction::Ignore,
            };
            if matches!(action, ClickAction::SignIn) {
                *state = SessionState::Pending { provider };
            }
            action
        };

        match action {
            ClickAction::SignIn => self.run_sign_in(provider).await,
            ClickAction::SignOut => self.run_sign_out().await,
            ClickAction::Ignore => {
                tracing::debug!(?provider, "click ignored in current state");
            }
        }
    }

    /// Applies an out-of-band auth-state notification from the SDK.
    pub async fn on_auth_state_changed(&self, user: Option<AuthUser>) {
        if self.inner.inert {
            return;
        }
        match user {
            Some(user) => self.apply_signed_in(user).await,
            None => {
                tracing::debug!("auth state: no user");
                self.reset_unauthenticated().await;
            }
        }
    }

    /// Runs the popup round trip after the state moved to `Pending`.
    async fn run_sign_in(&self, provider: ProviderId) {
        let descriptor = provider.descriptor();
        self.inner.notifier.dismiss().await;
        self.render_current().await;

        match self.inner.gateway.sign_in_with_popup(descriptor).await {
            Ok(user) => {
                tracing::info!(provider = descriptor.display_name, "sign-in resolved");
                self.apply_signed_in(user).await;
            }
            Err(err) => {
                // Abandon the attempt: the button returns to its
                // enabled sign-in state and the user may retry.
                {
                    let mut state = self.inner.state.lock().await;
                    *state = SessionState::Unauthenticated;
                }
                self.inner
                    .notifier
                    .notify(descriptor.display_name, &err.code, &err.message)
                    .await;
                self.render_current().await;
            }
        }
    }

    async fn run_sign_out(&self) {
        if let Err(err) = self.inner.gateway.sign_out().await {
            tracing::error!(error = %err, "sign-out failed");
        }
        self.reset_unauthenticated().await;
    }

    /// Moves to `Authenticated`, renders, and kicks off the token
    /// fetch. Shared by the click continuation and the stream.
    async fn apply_signed_in(&self, user: AuthUser) {
        let mut next = SessionState::authenticated(&user);
        {
            let mut state = self.inner.state.lock().await;
            // The stream may echo a login the click continuation
            // already applied; keep a token that was fetched in the
            // meantime so the rendering converges instead of blanking
            // the field.
            if let (
                SessionState::Authenticated {
                    email: current_email,
                    token: current_token,
                    ..
                },
                SessionState::Authenticated {
                    email: next_email,
                    token: next_token,
                    ..
                },
            ) = (&*state, &mut next)
            {
                if current_email == next_email {
                    *next_token = current_token.clone();
                }
            }
            *state = next;
        }
        self.render_current().await;
        self.spawn_token_fetch(user.email);
    }

    async fn reset_unauthenticated(&self) {
        {
            let mut state = self.inner.state.lock().await;
            *state = SessionState::Unauthenticated;
        }
        self.render_current().await;
    }

    /// Fetches the identity token in the background. Failure is
    /// non-fatal: the form field stays empty and nothing is surfaced
    /// beyond the log. The result is dropped if the session moved on
    /// while the fetch was in flight.
    fn spawn_token_fetch(&self, email: String) {
        let this = self.clone();
        tokio::spawn(async move {
            match this.inner.gateway.fetch_id_token().await {
                Ok(token) => {
                    let updated = {
                        let mut state = this.inner.state.lock().await;
                        match &mut *state {
                            SessionState::Authenticated {
                                email: current,
                                token: slot,
                                ..
                            } if *current == email => {
                                *slot = Some(token);
                                true
                            }
                            _ => false,
                        }
                    };
                    if updated {
                        this.render_current().await;
                    }
                }
                Err(err) => {
                    tracing::debug!(error = %err, "identity token fetch failed");
                }
            }
        });
    }

    async fn render_current(&self) {
        let state = self.inner.state.lock().await.clone();
        presenter::render(self.inner.ui.as_ref(), &state);
    }
}
