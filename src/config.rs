// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Every setting has a default, so the server starts with no environment at
//! all: port 3000, uploads under `./uploads`, URLs on `http://localhost:3000`.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory where uploaded images are written and served from
    pub upload_dir: PathBuf,
    /// Externally reachable origin used to build upload URLs (no trailing `/`)
    pub public_base_url: String,
    /// Maximum accepted request body size for image uploads
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            public_base_url: default_base_url(DEFAULT_PORT),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ConfigError::Invalid(format!("PORT must be a port number, got {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };

        let upload_dir = non_empty(&lookup, "UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let public_base_url = match non_empty(&lookup, "PUBLIC_BASE_URL") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(_) => {
                return Err(ConfigError::Invalid(
                    "PUBLIC_BASE_URL must start with http:// or https://".to_string(),
                ))
            }
            None => default_base_url(port),
        };

        let max_upload_bytes = match non_empty(&lookup, "MAX_UPLOAD_BYTES") {
            Some(raw) => raw.parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!("MAX_UPLOAD_BYTES must be a byte count, got {raw:?}"))
            })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            port,
            upload_dir,
            public_base_url,
            max_upload_bytes,
        })
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_base_url(port: u16) -> String {
    format!("http://localhost:{port}")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = Config::from_lookup(lookup_from(&[])).expect("Config should load");

        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.public_base_url, "http://localhost:3000");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_base_url_follows_port_and_trims_slash() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.public_base_url, "http://localhost:8080");

        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("PUBLIC_BASE_URL", "https://tracker.example.com/"),
        ]))
        .unwrap();
        assert_eq!(config.public_base_url, "https://tracker.example.com");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("MAX_UPLOAD_BYTES", "-1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PUBLIC_BASE_URL", "ftp://x")])).is_err());
    }
}
