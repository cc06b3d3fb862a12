//! Process configuration, resolved once at startup from the environment.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;
use url::Url;

pub const ENV_API_URL: &str = "METRICDASH_API_URL";
pub const ENV_HOSTNAME: &str = "METRICDASH_HOSTNAME";
pub const ENV_API_KEY: &str = "METRICDASH_API_KEY";

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid METRICDASH_API_URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("METRICDASH_API_URL '{0}' cannot be used as a base URL")]
    NotABase(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub hostname: String,
    /// Bearer credential. `None` when unset or empty.
    pub api_key: Option<String>,
    pub interval: Duration,
    /// Extra PEM root certificate for HTTPS.
    pub tls_ca: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        let raw_url = non_empty(ENV_API_URL).ok_or(ConfigError::Missing(ENV_API_URL))?;
        let base_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.clone(),
            source,
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(raw_url));
        }
        let hostname = non_empty(ENV_HOSTNAME).ok_or(ConfigError::Missing(ENV_HOSTNAME))?;

        Ok(Self {
            base_url,
            hostname: hostname.trim().to_string(),
            api_key: non_empty(ENV_API_KEY),
            interval: DEFAULT_INTERVAL,
            tls_ca: None,
        })
    }

    /// `{base_url}/api/metrics/{hostname}`, with the hostname as one encoded segment.
    pub fn metrics_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segs) = url.path_segments_mut() {
            segs.pop_if_empty()
                .extend(["api", "metrics", self.hostname.as_str()]);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn resolves_all_three_values() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_API_URL, "http://metrics.local:8080"),
            (ENV_HOSTNAME, "h1"),
            (ENV_API_KEY, "secret"),
        ]))
        .unwrap();
        assert_eq!(cfg.hostname, "h1");
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.interval, Duration::from_secs(10));
        assert_eq!(
            cfg.metrics_url().as_str(),
            "http://metrics.local:8080/api/metrics/h1"
        );
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_API_URL, "http://x"),
            (ENV_HOSTNAME, "h1"),
            (ENV_API_KEY, ""),
        ]))
        .unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn url_and_hostname_are_required() {
        let err = Config::from_lookup(lookup(&[(ENV_HOSTNAME, "h1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_API_URL)));
        let err = Config::from_lookup(lookup(&[(ENV_API_URL, "http://x")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_HOSTNAME)));
        let err = Config::from_lookup(lookup(&[(ENV_API_URL, "not a url"), (ENV_HOSTNAME, "h")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
        let err = Config::from_lookup(lookup(&[(ENV_API_URL, "mailto:a@b"), (ENV_HOSTNAME, "h")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotABase(_)));
    }

    #[test]
    fn metrics_url_keeps_base_path_and_encodes_host() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_API_URL, "https://example.com/monitor/"),
            (ENV_HOSTNAME, "web 01/a"),
        ]))
        .unwrap();
        assert_eq!(
            cfg.metrics_url().as_str(),
            "https://example.com/monitor/api/metrics/web%2001%2Fa"
        );
    }
}
