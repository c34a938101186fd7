// ABOUTME: Logging configuration and structured logging setup for the platform
// ABOUTME: Env-driven level and format; pretty output for development, JSON for production

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lunara Health

use std::env;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Build the configuration from `RUST_LOG` / `LOG_FORMAT` env variables
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = env::var("RUST_LOG") {
            config.level = level;
        }
        match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => config.format = LogFormat::Json,
            Ok("compact") => config.format = LogFormat::Compact,
            _ => {}
        }
        config
    }

    /// Install the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Fails when the level string is not a valid filter directive or when a
    /// global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)?;
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_file(self.include_location))
                .try_init()?,
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_file(self.include_location))
                .try_init()?,
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_file(self.include_location))
                .try_init()?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = LoggingConfig {
            level: "not a level!!".into(),
            ..LoggingConfig::default()
        };
        assert!(config.init().is_err());
    }
}
