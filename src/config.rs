//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use anyhow::Context;

use crate::gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `GEMINI_API_KEY`, falling back to `API_KEY`.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the process environment. `.env` is loaded by the binary at start-up.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY"));
        if api_key.is_none() {
            tracing::warn!(
                "GEMINI_API_KEY environment variable not set. Enhancement requests will fail until it is configured."
            );
        }

        let bind = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid BIND_ADDR: {bind}"))?;

        Ok(Self {
            api_key,
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr,
        })
    }

    pub fn gemini_client(&self) -> GeminiClient {
        GeminiClient::builder()
            .maybe_api_key(self.api_key.clone())
            .model(self.model.clone())
            .base_url(self.api_base.clone())
            .build()
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
    fn test_defaults_without_api_key() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(!config.gemini_client().has_api_key());
    }

    #[test]
    fn test_api_key_fallback() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("legacy"));

        let config = Config::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "legacy"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let config =
            Config::from_lookup(lookup(&[("GEMINI_API_KEY", " "), ("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GEMINI_MODEL", "gemini-2.5-flash-image-preview"),
            ("GEMINI_API_BASE", "http://127.0.0.1:8081"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.5-flash-image-preview");
        assert_eq!(config.api_base, "http://127.0.0.1:8081");
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDR", "not an address")])).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }
}
