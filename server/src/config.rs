//! Startup configuration.
//!
//! # Overview
//! The service runs with no environment at all: the defaults are the fixed
//! deployment the front-end expects (API on `127.0.0.1:8000`, UI on
//! `http://localhost:3000`).
//!
//! # Design
//! `HOST`, `PORT` and `CORS_ORIGIN` are optional overrides on top of those
//! defaults, read once at startup. Leaving all three unset gives exactly the
//! fixed deployment. Parsing goes through [`Config::from_lookup`] so tests
//! never touch the process environment.

use std::num::ParseIntError;

use axum::http::{header::InvalidHeaderValue, HeaderValue};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// The single origin allowed to make credentialed cross-origin calls.
    pub allowed_origin: HeaderValue,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("CORS_ORIGIN is not a valid header value: {value:?}")]
    InvalidOrigin {
        value: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `CORS_ORIGIN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(value) = lookup("PORT") {
            config.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        if let Some(value) = lookup("CORS_ORIGIN") {
            config.allowed_origin = HeaderValue::from_str(&value)
                .map_err(|source| ConfigError::InvalidOrigin { value, source })?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
