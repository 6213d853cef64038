//! Server configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub dictionary_url: String,
    pub dictionary_timeout: Duration,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let host = lookup("HOST")
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let dictionary_url = lookup("DICTIONARY_API_URL")
            .map(|value| value.trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string());

        let dictionary_timeout = lookup("DICTIONARY_TIMEOUT_SECS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|value| !matches!(value.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            host,
            port,
            log_level,
            dictionary_url,
            dictionary_timeout,
            seed_demo_data,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.dictionary_url, DEFAULT_DICTIONARY_URL);
        assert_eq!(config.dictionary_timeout, Duration::from_secs(10));
        assert!(config.seed_demo_data);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DICTIONARY_API_URL", "http://localhost:9000/entries/"),
            ("DICTIONARY_TIMEOUT_SECS", "3"),
            ("SEED_DEMO_DATA", "false"),
        ]);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.dictionary_url, "http://localhost:9000/entries");
        assert_eq!(config.dictionary_timeout, Duration::from_secs(3));
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[("PORT", "http"), ("DICTIONARY_TIMEOUT_SECS", "0")]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.dictionary_timeout, Duration::from_secs(10));
    }
}
