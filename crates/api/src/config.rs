//! Process configuration (environment variables, validated at startup).

use std::net::SocketAddr;

use thiserror::Error;

use botdesk_auth::SigningKey;

/// Development fallback signing key.
///
/// Kept so local setups work out of the box, but it is a predictable secret:
/// [`Config::from_env`] warns loudly when it is active and refuses to boot a
/// production process on it.
pub const DEV_SIGNING_KEY: &str = "botdesk-development-signing-key-not-for-production";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),

    #[error("JWT_KEY is not set; the development signing key is not allowed in production")]
    InsecureSigningKey,
}

pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub signing_key: SigningKey,
    /// True when the development fallback key is active.
    pub default_signing_key: bool,
}

/// Startup facts handlers may report on (admin config probe).
#[derive(Debug, Clone, Copy)]
pub struct RuntimeFlags {
    pub default_signing_key: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_env = AppEnv::from_env();

        let port: u16 = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 8080,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let (signing_key, default_signing_key) =
            Self::resolve_signing_key(app_env, std::env::var("JWT_KEY").ok())?;

        Ok(Self {
            addr,
            app_env,
            signing_key,
            default_signing_key,
        })
    }

    /// Pick the signing key from the `JWT_KEY` setting.
    ///
    /// Absent or blank falls back to [`DEV_SIGNING_KEY`] with a warning; in
    /// production the fallback is rejected outright.
    fn resolve_signing_key(
        app_env: AppEnv,
        raw: Option<String>,
    ) -> Result<(SigningKey, bool), ConfigError> {
        match raw {
            Some(key) if !key.trim().is_empty() => Ok((SigningKey::from_secret(key), false)),
            _ if app_env.is_production() => Err(ConfigError::InsecureSigningKey),
            _ => {
                tracing::warn!(
                    "JWT_KEY not set; using the insecure development signing key. \
                     Do not deploy this configuration."
                );
                Ok((SigningKey::from_secret(DEV_SIGNING_KEY), true))
            }
        }
    }

    pub fn flags(&self) -> RuntimeFlags {
        RuntimeFlags {
            default_signing_key: self.default_signing_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_is_used_as_is() {
        let (key, default) =
            Config::resolve_signing_key(AppEnv::Production, Some("prod-secret".to_string()))
                .unwrap();
        assert!(!default);
        assert_eq!(key.as_bytes(), b"prod-secret");
    }

    #[test]
    fn development_falls_back_to_the_dev_key() {
        let (key, default) = Config::resolve_signing_key(AppEnv::Development, None).unwrap();
        assert!(default);
        assert_eq!(key.as_bytes(), DEV_SIGNING_KEY.as_bytes());
    }

    #[test]
    fn blank_key_counts_as_absent() {
        let (_, default) =
            Config::resolve_signing_key(AppEnv::Development, Some("   ".to_string())).unwrap();
        assert!(default);
    }

    #[test]
    fn production_refuses_the_dev_key() {
        let err = Config::resolve_signing_key(AppEnv::Production, None).unwrap_err();
        assert_eq!(err, ConfigError::InsecureSigningKey);

        let err =
            Config::resolve_signing_key(AppEnv::Production, Some(String::new())).unwrap_err();
        assert_eq!(err, ConfigError::InsecureSigningKey);
    }
}
