// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses the data-source URL, log level, environment, and recommender tunables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use nutrigap_intelligence::config::{ReasonOrdering, RecommenderConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    #[default]
    Info,
    /// Per-round debugging output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe data-source location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataSourceUrl {
    /// `SQLite` database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite` (tests and demos)
    Memory,
    /// JSON dataset file loaded into memory
    Json {
        /// Dataset file path
        path: PathBuf,
    },
}

impl DataSourceUrl {
    /// Parse from string.
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:`, `json:<path>`, and bare
    /// paths. Bare paths ending in `.json` are datasets; any other bare path
    /// is treated as a `SQLite` file.
    ///
    /// # Errors
    ///
    /// Returns a config error for an empty value or an empty path.
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("data source URL is empty"));
        }

        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                return Ok(Self::Memory);
            }
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            return non_empty_path(s, path_str).map(|path| Self::SQLite { path });
        }

        if let Some(path_str) = s.strip_prefix("json:") {
            return non_empty_path(s, path_str).map(|path| Self::Json { path });
        }

        let path = PathBuf::from(s);
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            Ok(Self::Json { path })
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite { path })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
            Self::Json { path } => format!("json:{}", path.display()),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Check if this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }

    /// Check if this is a JSON dataset
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}

fn non_empty_path(raw: &str, path_str: &str) -> AppResult<PathBuf> {
    if path_str.trim().is_empty() {
        return Err(AppError::config_invalid(format!(
            "data source URL '{raw}' has an empty path"
        )));
    }
    Ok(PathBuf::from(path_str))
}

impl Default for DataSourceUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DATA_SOURCE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DATA_SOURCE_URL),
            ),
        }
    }
}

impl fmt::Display for DataSourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Where patient, ledger, standard and food data is read from
    pub data_source: DataSourceUrl,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Greedy recommender tunables
    pub recommender: RecommenderConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when a variable is set but cannot be parsed, or
    /// the resulting recommender configuration is invalid.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same conditions as [`EngineConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_source = DataSourceUrl::parse_url(
            &lookup(env_config::DATA_SOURCE).unwrap_or_else(|| defaults::DATA_SOURCE_URL.into()),
        )?;

        let defaults = RecommenderConfig::default();
        let reason_ordering = match lookup(env_config::REASON_ORDER) {
            Some(raw) => ReasonOrdering::parse(&raw).ok_or_else(|| {
                AppError::config_invalid(format!(
                    "Invalid {} value '{raw}': expected 'contribution' or 'gap_order'",
                    env_config::REASON_ORDER
                ))
            })?,
            None => defaults.reason_ordering,
        };

        let recommender = RecommenderConfig {
            max_items: parse_var(&lookup, env_config::MAX_ITEMS)?.unwrap_or(defaults.max_items),
            calorie_offset: parse_var(&lookup, env_config::CALORIE_OFFSET)?
                .unwrap_or(defaults.calorie_offset),
            min_accepted_efficiency: parse_var(&lookup, env_config::MIN_EFFICIENCY)?
                .unwrap_or(defaults.min_accepted_efficiency),
            notable_contribution_pct: parse_var(&lookup, env_config::NOTABLE_PCT)?
                .unwrap_or(defaults.notable_contribution_pct),
            max_reason_nutrients: parse_var(&lookup, env_config::MAX_REASON_NUTRIENTS)?
                .unwrap_or(defaults.max_reason_nutrients),
            reason_ordering,
        };
        recommender.validate()?;

        let config = Self {
            data_source,
            log_level: LogLevel::from_str_or_default(
                &lookup(env_config::LOG_LEVEL).unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &lookup(env_config::ENVIRONMENT).unwrap_or_default(),
            ),
            recommender,
        };

        debug!(
            data_source = %config.data_source,
            environment = %config.environment,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "NutriGap Configuration:\n\
             - Data Source: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - Max Items: {}\n\
             - Calorie Offset: {}\n\
             - Min Efficiency: {}\n\
             - Reason Ordering: {:?}",
            self.data_source,
            self.log_level,
            self.environment,
            self.recommender.max_items,
            self.recommender.calorie_offset,
            self.recommender.min_accepted_efficiency,
            self.recommender.reason_ordering,
        )
    }
}

/// Parse an optional variable; unset and blank are `None`, unparseable is an error
fn parse_var<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))),
        _ => Ok(None),
    }
}
