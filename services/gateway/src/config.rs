//! Gateway configuration, read from the environment

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATASET_PATH: &str = "data/epitopes.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// JSON dataset snapshot served by the matcher
    pub dataset_path: PathBuf,
    /// Load the dataset before accepting requests
    pub warm_on_start: bool,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("EPITOPE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("EPITOPE_BIND_ADDR must be a socket address")?;

        let dataset_path = lookup("EPITOPE_DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

        let warm_on_start = match lookup("EPITOPE_WARM_ON_START") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("EPITOPE_WARM_ON_START: invalid boolean {:?}", value))?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            dataset_path,
            warm_on_start,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
        assert!(config.warm_on_start);
    }

    #[test]
    fn test_overrides() {
        let config = GatewayConfig::from_lookup(lookup(&[
            ("EPITOPE_BIND_ADDR", "127.0.0.1:9000"),
            ("EPITOPE_DATASET_PATH", "/srv/epitopes.json"),
            ("EPITOPE_WARM_ON_START", "off"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.dataset_path, PathBuf::from("/srv/epitopes.json"));
        assert!(!config.warm_on_start);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(GatewayConfig::from_lookup(lookup(&[("EPITOPE_BIND_ADDR", "nowhere")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[("EPITOPE_WARM_ON_START", "maybe")])).is_err());
    }
}
