//! Environment-based identity configuration.
//!
//! One variable per field, mirroring how the original deployment
//! feeds its identity settings outside the managed platform. A
//! missing or empty API key means "no configuration" and engages the
//! startup guard rather than an error.

use portico_domain::IdentityConfig;

/// Environment variable carrying the API key. Its absence disables
/// sign-in entirely.
pub const ENV_API_KEY: &str = "IDENTITY_APIKEY";
/// Environment variable carrying the auth domain.
pub const ENV_AUTH_DOMAIN: &str = "IDENTITY_AUTHDOMAIN";
/// Environment variable carrying the project id.
pub const ENV_PROJECT_ID: &str = "IDENTITY_PROJECTID";
/// Environment variable carrying the application id.
pub const ENV_APP_ID: &str = "IDENTITY_APPID";

/// Loads the identity configuration from the process environment.
#[must_use]
pub fn load_identity_config() -> Option<IdentityConfig> {
    identity_config_from(|name| std::env::var(name).ok())
}

/// Builds the configuration from an arbitrary variable lookup.
/// Empty values count as absent.
pub fn identity_config_from<F>(lookup: F) -> Option<IdentityConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
    let api_key = get(ENV_API_KEY)?;
    Some(IdentityConfig {
        api_key,
        auth_domain: get(ENV_AUTH_DOMAIN).unwrap_or_default(),
        project_id: get(ENV_PROJECT_ID).unwrap_or_default(),
        app_id: get(ENV_APP_ID).unwrap_or_default(),
    })
}
