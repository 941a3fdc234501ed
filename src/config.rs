//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Serialized classifier location
    pub model_path: PathBuf,

    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),

            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("rf_model.json")),

            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
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

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.bind_addr(), "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.model_path, PathBuf::from("rf_model.json"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9100"),
            ("MODEL_PATH", "/srv/models/rf.json"),
        ]));
        assert_eq!(config.bind_addr(), "0.0.0.0:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.model_path, PathBuf::from("/srv/models/rf.json"));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty"), ("HOST", "localhost:1")]));
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
