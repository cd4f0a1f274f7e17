use std::fmt::{Debug, Formatter};
use std::time::Duration;

use crate::constants::*;
use exportsign_core::{utils::Redact, Context};

/// Config carries all the configuration for the export api scheme.
#[derive(Clone, Default)]
pub struct Config {
    /// `secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXPORT_API_SECRET`]
    pub secret: Option<String>,
    /// `signing_window` bounds the acceptable clock skew between the claimed
    /// timestamp and the verifier's clock. Loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXPORT_API_SIGNING_WINDOW`] (seconds)
    ///
    /// Falls back to the verifier default of 300 seconds.
    pub signing_window: Option<Duration>,
}

impl Config {
    /// Create a new Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set signing_window.
    pub fn with_signing_window(mut self, window: Duration) -> Self {
        self.signing_window = Some(window);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(EXPORT_API_SECRET) {
            self.secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(EXPORT_API_SIGNING_WINDOW) {
            match v.parse::<u64>() {
                Ok(secs) => {
                    self.signing_window.get_or_insert(Duration::from_secs(secs));
                }
                Err(_) => {
                    log::warn!("ignoring non-numeric {EXPORT_API_SIGNING_WINDOW}: {v:?}");
                }
            }
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret", &self.secret.as_ref().map(Redact::from))
            .field("signing_window", &self.signing_window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exportsign_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (EXPORT_API_SECRET.to_string(), "devsecret".to_string()),
                (EXPORT_API_SIGNING_WINDOW.to_string(), "120".to_string()),
            ]),
        });

        let config = Config::new().from_env(&ctx);
        assert_eq!(config.secret.as_deref(), Some("devsecret"));
        assert_eq!(config.signing_window, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_explicit_values_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(EXPORT_API_SECRET.to_string(), "from-env".to_string())]),
        });

        let config = Config::new().with_secret("explicit").from_env(&ctx);
        assert_eq!(config.secret.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_bad_window_is_ignored() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                EXPORT_API_SIGNING_WINDOW.to_string(),
                "five minutes".to_string(),
            )]),
        });

        let config = Config::new().from_env(&ctx);
        assert!(config.signing_window.is_none());
    }
}
