//! UI surface port.
//!
//! The rendering layer is treated as a key-value store of named
//! elements. Every mutation is an absolute write, which is what makes
//! the presenter's rendering idempotent.

use portico_domain::ProviderId;
use serde::{Deserialize, Serialize};

/// Logical ids of the UI elements the controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiElement {
    /// The dismissible error banner container.
    Banner,
    /// The message text inside the banner.
    BannerMessage,
    /// The greeting shown to an authenticated user.
    Greeting,
    /// Container shown while a user is signed in.
    LoggedIn,
    /// Container shown while no user is signed in.
    LoggedOut,
    /// Container holding the provider buttons.
    SignWithContainer,
    /// Container holding the identity/token form.
    TokenFormContainer,
    /// One sign-in/sign-out button per provider.
    SignWithButton(ProviderId),
    /// Hidden form field carrying the user's email.
    IdentityInput,
    /// Hidden form field carrying the identity token.
    TokenInput,
}

/// Port to the rendering layer.
///
/// Implementations tolerate writes to elements the concrete surface
/// does not carry (the banner is optional); such writes are silent
/// no-ops.
pub trait UiSurface: Send + Sync {
    /// Sets an element's visible text.
    fn set_text(&self, element: UiElement, text: &str);

    /// Sets a form element's value.
    fn set_value(&self, element: UiElement, value: &str);

    /// Shows or hides an element.
    fn set_visible(&self, element: UiElement, visible: bool);

    /// Enables or disables an element.
    fn set_enabled(&self, element: UiElement, enabled: bool);
}
