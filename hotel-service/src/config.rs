//! Service configuration

use std::str::FromStr;
use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// hotel-service configuration, read from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port
    pub http_port: u16,
    /// Largest `count` a single request may ask for
    pub max_batch_size: usize,
    /// When set, every request draws from one shared seeded source
    pub rng_seed: Option<u64>,
    /// Environment: development | staging | production
    pub environment: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        Ok(Self {
            http_port: parse_var(&lookup, "HTTP_PORT")?.unwrap_or(8002),
            max_batch_size: parse_var(&lookup, "MAX_BATCH_SIZE")?.unwrap_or(100),
            rng_seed: parse_var(&lookup, "HOTEL_RNG_SEED")?,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            request_timeout: Duration::from_secs(
                parse_var(&lookup, "REQUEST_TIMEOUT_SECS")?.unwrap_or(30),
            ),
        })
    }
}

/// Unset or blank is `None`; anything else must parse
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>, BoxError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{name} has invalid value {raw:?}: {e}").into()),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.http_port, 8002);
        assert_eq!(config.max_batch_size, 100);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.environment, "development");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HTTP_PORT", "9000"),
            ("MAX_BATCH_SIZE", "25"),
            ("HOTEL_RNG_SEED", " 42 "),
            ("ENVIRONMENT", "staging"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.max_batch_size, 25);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.environment, "staging");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_seed_is_unset() {
        assert_eq!(load(&[("HOTEL_RNG_SEED", "")]).unwrap().rng_seed, None);
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let err = load(&[("MAX_BATCH_SIZE", "lots")]).unwrap_err();
        assert!(err.to_string().contains("MAX_BATCH_SIZE"));
        assert!(load(&[("HTTP_PORT", "70000")]).is_err());
    }
}
