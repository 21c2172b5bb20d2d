//! Portico - Demo entry point
//!
//! Wires the session controller to the simulated identity gateway
//! and the in-memory UI surface, then runs one scripted sign-in and
//! sign-out pass, logging a UI snapshot after each step. Without an
//! `IDENTITY_APIKEY` in the environment it demonstrates the inert
//! configuration-missing mode instead.

use std::sync::Arc;
use std::time::Duration;

use portico_application::ports::{Clock, IdentityGateway, Notifier, UiSurface};
use portico_application::{BannerNotifier, SessionController};
use portico_domain::{AuthUser, ProviderId};
use portico_infrastructure::{load_identity_config, MemoryUi, SimulatedGateway, SystemClock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn demo_user() -> AuthUser {
    AuthUser {
        display_name: Some("Ana".to_string()),
        email: "ana@x.com".to_string(),
        provider_keys: vec!["google.com".to_string()],
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_identity_config();

    let ui = Arc::new(MemoryUi::new());
    let gateway = Arc::new(SimulatedGateway::new(demo_user(), "abc123"));
    let notifier = BannerNotifier::new(
        Arc::clone(&ui) as Arc<dyn UiSurface>,
        Arc::new(SystemClock::new()) as Arc<dyn Clock>,
    );

    let controller = SessionController::bootstrap(
        config.as_ref(),
        Arc::clone(&gateway) as Arc<dyn IdentityGateway>,
        Arc::clone(&ui) as Arc<dyn UiSurface>,
        Arc::new(notifier) as Arc<dyn Notifier>,
    );

    if controller.is_inert() {
        tracing::warn!(snapshot = %ui.snapshot_json(), "no identity configuration; buttons stay disabled");
        return;
    }

    // Forward the gateway's auth-state stream into the controller,
    // as the page would on load.
    let mut events = gateway.subscribe();
    let stream_controller = controller.clone();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            stream_controller.on_auth_state_changed(event).await;
        }
    });

    tracing::info!(snapshot = %ui.snapshot_json(), "page loaded");

    controller.handle_click(ProviderId::Google).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    tracing::info!(snapshot = %ui.snapshot_json(), "signed in with Google");

    controller.handle_click(ProviderId::Google).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    tracing::info!(snapshot = %ui.snapshot_json(), "signed out");
}
