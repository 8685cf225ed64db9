// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is read from `vendas.toml` and includes:
//! - `database`: path of the SQLite file, or `:memory:` for a one-shot store
//! - `[load] mode`: `statement` or `atomic`
//! - `[clean]`: labels used for absent category and product name
//! - `[metrics] top_n`: length of the rankings
//!
//! Every key is optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use vd_core::clean::{DEFAULT_CATEGORY_FILL, DEFAULT_PRODUCT_FILL};
use vd_core::metrics::DEFAULT_TOP_N;
use vd_core::{FillDefaults, LoadMode};

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "vendas.toml";
const DEFAULT_DB_FILE: &str = "vendas.db";
const IN_MEMORY: &str = ":memory:";

/// Contents of `vendas.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database file, relative to the config file's directory.
    pub database: String,
    pub load: LoadConfig,
    pub clean: CleanConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    pub mode: LoadMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    pub category_fill: String,
    pub product_fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: DEFAULT_DB_FILE.to_string(),
            load: LoadConfig::default(),
            clean: CleanConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        CleanConfig {
            category_fill: DEFAULT_CATEGORY_FILL.to_string(),
            product_fill: DEFAULT_PRODUCT_FILL.to_string(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl CleanConfig {
    pub fn fill(&self) -> FillDefaults {
        FillDefaults {
            category: self.category_fill.clone(),
            product: self.product_fill.clone(),
        }
    }
}

/// Where the tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    /// A fresh in-memory store, loaded with the fixture on open.
    Memory,
    File(PathBuf),
}

impl DbLocation {
    pub fn display(&self) -> String {
        match self {
            DbLocation::Memory => IN_MEMORY.to_string(),
            DbLocation::File(path) => path.display().to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        if config.metrics.top_n == 0 {
            return Err(Error::Config("metrics.top_n must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Serializes configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }

    /// Resolve a database path against `base`.
    pub fn db_location(&self, base: &Path) -> DbLocation {
        if self.database == IN_MEMORY {
            return DbLocation::Memory;
        }
        let path = Path::new(&self.database);
        if path.is_absolute() {
            DbLocation::File(path.to_path_buf())
        } else {
            DbLocation::File(base.join(path))
        }
    }
}

/// Effective settings after reading the config file and applying overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    /// File the config came from, if any.
    pub source: Option<PathBuf>,
    pub db: DbLocation,
}

/// Find and load the configuration.
///
/// An explicit `--config` path, or else `VENDAS_CONFIG`, must name an
/// existing file. Without either, `vendas.toml` in `dir` is used if present,
/// and the defaults apply otherwise. Relative paths resolve against `dir`.
/// The configured database path resolves against the config file's
/// directory; `--db` or `VENDAS_DB` replace it and resolve against `dir`.
pub fn resolve(dir: &Path, explicit: Option<&Path>, db_override: Option<&str>) -> Result<Settings> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(env::config_file)
        .map(|p| dir.join(p));
    let candidate = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::ConfigNotFound(path));
            }
            Some(path)
        }
        None => Some(dir.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let mut config = match &candidate {
        Some(path) => {
            tracing::debug!("reading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    let base = candidate
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(dir)
        .to_path_buf();

    let db_override = db_override
        .map(str::to_string)
        .or_else(|| env::database().map(|p| p.display().to_string()));
    let db = match db_override {
        Some(db) => {
            config.database = db;
            config.db_location(dir)
        }
        None => config.db_location(&base),
    };

    Ok(Settings {
        config,
        source: candidate,
        db,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
