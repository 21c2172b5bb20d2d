//! Sign-in error types and classification.
//!
//! The identity SDK reports failures as a `code` string from a known
//! vocabulary plus a free-form message. Classification maps the code
//! to the Spanish message shown in the banner; unknown codes fall
//! back to a generic message built from the raw text.

use thiserror::Error;

/// A failure reported by the identity SDK.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct SignInError {
    /// SDK error code, e.g. `auth/popup-closed-by-user`.
    pub code: String,
    /// Raw message attached by the SDK.
    pub message: String,
}

impl SignInError {
    /// Creates an error from an SDK code and raw message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Classified sign-in error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The user closed the popup before completing sign-in.
    PopupClosedByUser,
    /// The browser blocked the popup.
    PopupBlocked,
    /// A duplicate popup request was cancelled.
    CancelledPopupRequest,
    /// The network request to the provider failed.
    NetworkRequestFailed,
    /// The page's domain is not authorized for sign-in.
    UnauthorizedDomain,
    /// The provider is not enabled for this application.
    OperationNotAllowed,
    /// An account already exists with the same email but a different
    /// credential.
    AccountExistsWithDifferentCredential,
    /// Anything outside the known vocabulary.
    Unknown,
}

impl ErrorCode {
    /// Classifies an SDK code string.
    #[must_use]
    pub fn classify(code: &str) -> Self {
        match code {
            "auth/popup-closed-by-user" => Self::PopupClosedByUser,
            "auth/popup-blocked" => Self::PopupBlocked,
            "auth/cancelled-popup-request" => Self::CancelledPopupRequest,
            "auth/network-request-failed" => Self::NetworkRequestFailed,
            "auth/unauthorized-domain" => Self::UnauthorizedDomain,
            "auth/operation-not-allowed" => Self::OperationNotAllowed,
            "auth/account-exists-with-different-credential" => {
                Self::AccountExistsWithDifferentCredential
            }
            _ => Self::Unknown,
        }
    }

    /// User-facing message for a classified failure.
    ///
    /// `provider_display_name` and `raw_message` only appear in the
    /// generic fallback for unknown codes.
    #[must_use]
    pub fn user_message(self, provider_display_name: &str, raw_message: &str) -> String {
        match self {
            Self::PopupClosedByUser => {
                "La ventana de inicio de sesión fue cerrada.".to_string()
            }
            Self::PopupBlocked => {
                "El navegador bloqueó la ventana emergente.".to_string()
            }
            Self::CancelledPopupRequest => {
                "Se canceló una solicitud de inicio de sesión duplicada.".to_string()
            }
            Self::NetworkRequestFailed => {
                "Fallo de red. Verifique su conexión e intente de nuevo.".to_string()
            }
            Self::UnauthorizedDomain => {
                "Este dominio no está autorizado para iniciar sesión.".to_string()
            }
            Self::OperationNotAllowed => {
                "El proveedor no está habilitado para esta aplicación.".to_string()
            }
            Self::AccountExistsWithDifferentCredential => {
                "Ya existe una cuenta con el mismo correo pero con otro proveedor."
                    .to_string()
            }
            Self::Unknown => {
                format!("Error al ingresar con {provider_display_name}: {raw_message}")
            }
        }
    }
}
