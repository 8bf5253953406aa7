//! Storefront configuration, read from the environment.

use serde::{Deserialize, Serialize};

use techstore_core::{DomainError, DomainResult};
use techstore_observability::LogFormat;

pub const ENV_LOG_FORMAT: &str = "TECHSTORE_LOG_FORMAT";
pub const ENV_STORE_NAME: &str = "TECHSTORE_STORE_NAME";
pub const ENV_CURRENCY: &str = "TECHSTORE_CURRENCY";
pub const ENV_NOTIFICATIONS: &str = "TECHSTORE_NOTIFICATIONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub store_name: String,
    /// Symbol printed after every amount.
    pub currency: String,
    /// Whether "item added" toasts are published.
    pub notifications: bool,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: "TechStore".to_string(),
            currency: "₽".to_string(),
            notifications: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl StorefrontConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw
                .parse()
                .map_err(|e| DomainError::validation(format!("{ENV_LOG_FORMAT}: {e}")))?;
        }

        if let Some(raw) = lookup(ENV_STORE_NAME) {
            config.store_name = non_blank(ENV_STORE_NAME, raw)?;
        }

        if let Some(raw) = lookup(ENV_CURRENCY) {
            config.currency = non_blank(ENV_CURRENCY, raw)?;
        }

        if let Some(raw) = lookup(ENV_NOTIFICATIONS) {
            config.notifications = parse_bool(ENV_NOTIFICATIONS, &raw)?;
        }

        Ok(config)
    }

    /// `"24 990 ₽"`.
    pub fn price(&self, amount: techstore_core::Money) -> String {
        format!("{amount} {}", self.currency)
    }
}

fn non_blank(key: &str, raw: String) -> DomainResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{key} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn parse_bool(key: &str, raw: &str) -> DomainResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DomainError::validation(format!(
            "{key}: expected a boolean, got `{other}`"
        ))),
    }
}
