//! Engine configuration loaded from the environment.

use std::time::Duration;

/// Connection string used when `PERSON_DB_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:persons.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 5_000;

/// Runtime configuration for the person store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// sqlx connection string (`sqlite:` scheme).
    pub database_url: String,
    pub max_connections: u32,
    /// Deadline applied to every store operation, connection included.
    pub operation_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            operation_timeout: Duration::from_millis(DEFAULT_OPERATION_TIMEOUT_MS),
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `PERSON_DB_URL`
    /// - `PERSON_DB_MAX_CONNECTIONS`
    /// - `PERSON_DB_TIMEOUT_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database_url = lookup("PERSON_DB_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.database_url);

        let max_connections = parse_or(
            &lookup,
            "PERSON_DB_MAX_CONNECTIONS",
            defaults.max_connections,
        )
        .max(1);

        let timeout_ms = parse_or(&lookup, "PERSON_DB_TIMEOUT_MS", DEFAULT_OPERATION_TIMEOUT_MS);

        Self {
            database_url,
            max_connections,
            operation_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = EngineConfig::from_lookup(|_| None);
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn reads_every_variable() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("PERSON_DB_URL", "sqlite::memory:"),
            ("PERSON_DB_MAX_CONNECTIONS", "2"),
            ("PERSON_DB_TIMEOUT_MS", "750"),
        ]));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.operation_timeout, Duration::from_millis(750));
    }

    #[test]
    fn bad_numbers_fall_back_to_defaults() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("PERSON_DB_MAX_CONNECTIONS", "many"),
            ("PERSON_DB_TIMEOUT_MS", "-1"),
        ]));

        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(
            config.operation_timeout,
            Duration::from_millis(DEFAULT_OPERATION_TIMEOUT_MS)
        );
    }

    #[test]
    fn zero_connections_is_raised_to_one() {
        let config =
            EngineConfig::from_lookup(lookup_from(&[("PERSON_DB_MAX_CONNECTIONS", "0")]));
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn blank_url_uses_default() {
        let config = EngineConfig::from_lookup(lookup_from(&[("PERSON_DB_URL", "   ")]));
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
