//! Error notifiers.
//!
//! `BannerNotifier` surfaces classified failures in the shared banner
//! element with a 5-second auto-hide; `NullNotifier` keeps only the
//! diagnostic log. Either composes with the controller, which is how
//! the with- and without-banner variants of the original collapse
//! into one code path.

use std::sync::Arc;

use portico_domain::{ErrorCode, ErrorNotice, NOTICE_TTL};
use tokio::sync::Mutex;

use crate::ports::{Clock, Notifier, UiElement, UiSurface};

/// Notifier backed by the shared banner element.
///
/// At most one hide timer is ever pending: every `notify` and
/// `dismiss` bumps a generation counter, and a timer only hides the
/// banner if its generation is still current when it fires.
#[derive(Clone)]
pub struct BannerNotifier {
    ui: Arc<dyn UiSurface>,
    clock: Arc<dyn Clock>,
    state: Arc<Mutex<BannerState>>,
}

#[derive(Default)]
struct BannerState {
    generation: u64,
    current: Option<ErrorNotice>,
}

impl BannerNotifier {
    /// Creates a notifier over the given UI surface and clock.
    #[must_use]
    pub fn new(ui: Arc<dyn UiSurface>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ui,
            clock,
            state: Arc::new(Mutex::new(BannerState::default())),
        }
    }

    /// The notice currently visible, if any.
    pub async fn current_notice(&self) -> Option<ErrorNotice> {
        self.state.lock().await.current.clone()
    }
}

#[async_trait::async_trait]
impl Notifier for BannerNotifier {
    async fn notify(&self, provider_display_name: &str, code: &str, raw_message: &str) {
        // Diagnostics first: the banner is an optional surface and its
        // absence must never suppress the raw error.
        tracing::error!(
            provider = provider_display_name,
            code,
            raw = raw_message,
            "sign-in failed"
        );

        let message = ErrorCode::classify(code).user_message(provider_display_name, raw_message);
        let generation = {
            let mut state = self.state.lock().await;
            state.generation += 1;
            state.current = Some(ErrorNotice::new(message.clone(), self.clock.now()));
            state.generation
        };

        self.ui.set_text(UiElement::BannerMessage, &message);
        self.ui.set_visible(UiElement::Banner, true);

        let ui = Arc::clone(&self.ui);
        let state = Arc::clone(&self.state);
        // The deadline is anchored to the notify call itself, not to
        // whenever the runtime first polls the spawned task.
        let deadline = tokio::time::Instant::now() + NOTICE_TTL;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let mut state = state.lock().await;
            if state.generation == generation {
                state.current = None;
                ui.set_visible(UiElement::Banner, false);
            }
        });
    }

    async fn dismiss(&self) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.current = None;
        drop(state);
        self.ui.set_visible(UiElement::Banner, false);
    }
}

/// No-op notifier for surfaces without a banner element. Failures
/// still reach the diagnostic log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl NullNotifier {
    /// Creates the no-op notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, provider_display_name: &str, code: &str, raw_message: &str) {
        tracing::error!(
            provider = provider_display_name,
            code,
            raw = raw_message,
            "sign-in failed"
        );
    }

    async fn dismiss(&self) {}
}
