use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SETTINGS_PATH: &str = "settings.toml";
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 720;
pub const MAX_SESSION_TTL_MINUTES: i64 = 525_600;

pub const SMARTY_BASE_URL: &str = "https://us-street.api.smarty.com";
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const OVERPASS_BASE_URL: &str = "https://overpass-api.de";

/// Base URLs of the third-party providers. Overridable so tests and
/// self-hosted mirrors can stand in for the public endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderEndpoints {
    pub smarty: String,
    pub nominatim: String,
    pub overpass: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            smarty: SMARTY_BASE_URL.to_string(),
            nominatim: NOMINATIM_BASE_URL.to_string(),
            overpass: OVERPASS_BASE_URL.to_string(),
        }
    }
}

/// Process-level configuration, read once from the environment at startup.
///
/// Administrator-editable values (password, titles, API keys) live in
/// [`crate::settings::SettingsStore`] instead.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub settings_path: PathBuf,
    /// HMAC key for session tokens and anti-forgery tokens.
    pub session_secret: Vec<u8>,
    pub session_ttl_minutes: i64,
    pub cookie_secure: bool,
    /// Bearer token for the admin settings API. The API is off when unset.
    pub admin_token: Option<String>,
    pub endpoints: ProviderEndpoints,
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn base_url(name: &str, default: &str) -> String {
    env_non_empty(name)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}

fn random_secret() -> Vec<u8> {
    use rand::RngCore;
    let mut secret = vec![0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut secret);
    secret
}

/// Parse `SESSION_TTL_MINUTES`: non-positive or unparseable values fall back
/// to the default, anything above a year is capped at a year.
fn session_ttl(raw: Option<&str>) -> i64 {
    match raw.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(minutes) if minutes > MAX_SESSION_TTL_MINUTES => {
            tracing::warn!(
                requested = minutes,
                max = MAX_SESSION_TTL_MINUTES,
                "SESSION_TTL_MINUTES too large, capping"
            );
            MAX_SESSION_TTL_MINUTES
        }
        Some(minutes) if minutes > 0 => minutes,
        _ => DEFAULT_SESSION_TTL_MINUTES,
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let session_secret = match env_non_empty("SESSION_SECRET") {
            Some(secret) => secret.into_bytes(),
            None => {
                tracing::warn!(
                    "SESSION_SECRET not set, using a per-process random secret; sessions will not survive a restart"
                );
                random_secret()
            }
        };

        Self {
            bind_addr: env_non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            settings_path: env_non_empty("SETTINGS_PATH")
                .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string())
                .into(),
            session_secret,
            session_ttl_minutes: session_ttl(env_non_empty("SESSION_TTL_MINUTES").as_deref()),
            cookie_secure: env_non_empty("COOKIE_SECURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            admin_token: env_non_empty("ADMIN_TOKEN"),
            endpoints: ProviderEndpoints {
                smarty: base_url("SMARTY_BASE_URL", SMARTY_BASE_URL),
                nominatim: base_url("NOMINATIM_BASE_URL", NOMINATIM_BASE_URL),
                overpass: base_url("OVERPASS_BASE_URL", OVERPASS_BASE_URL),
            },
        }
    }
}

impl Default for ServerConfig {
    /// Defaults with a random session secret and no admin token.
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            settings_path: DEFAULT_SETTINGS_PATH.into(),
            session_secret: random_secret(),
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            cookie_secure: false,
            admin_token: None,
            endpoints: ProviderEndpoints::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_point_at_public_services() {
        let endpoints = ProviderEndpoints::default();
        assert_eq!(endpoints.smarty, "https://us-street.api.smarty.com");
        assert_eq!(endpoints.nominatim, "https://nominatim.openstreetmap.org");
        assert_eq!(endpoints.overpass, "https://overpass-api.de");
    }

    #[test]
    fn default_config_has_random_secret() {
        let a = ServerConfig::default();
        let b = ServerConfig::default();
        assert_eq!(a.session_secret.len(), 32);
        assert_ne!(a.session_secret, b.session_secret);
        assert_eq!(a.session_ttl_minutes, 720);
        assert!(a.admin_token.is_none());
    }

    #[test]
    fn session_ttl_is_bounded() {
        assert_eq!(session_ttl(None), DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(session_ttl(Some("90")), 90);
        assert_eq!(session_ttl(Some("0")), DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(session_ttl(Some("-5")), DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(session_ttl(Some("soon")), DEFAULT_SESSION_TTL_MINUTES);
        assert_eq!(session_ttl(Some("200000000000")), MAX_SESSION_TTL_MINUTES);
    }

    #[test]
    fn capped_ttl_still_issues_tokens() {
        let ttl = session_ttl(Some("200000000000"));
        let token = crate::auth::session::issue_session_token(b"secret", "sid", false, ttl);
        assert!(token.is_ok());
    }
}
