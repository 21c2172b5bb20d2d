//! Identity SDK startup configuration.

use serde::{Deserialize, Serialize};

/// Opaque configuration handed to the identity SDK at startup.
///
/// The controller never inspects these values; it only cares whether
/// a configuration exists at all. Absence is not an error; it puts
/// the controller into its inert configuration-missing mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// API key for the identity service.
    pub api_key: String,
    /// Authentication domain.
    pub auth_domain: String,
    /// Project identifier.
    pub project_id: String,
    /// Application identifier.
    pub app_id: String,
}
