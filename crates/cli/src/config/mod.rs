// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `nestcheck.toml`.
//!
//! Every section is optional. Unknown keys are reported as warnings rather
//! than errors so older binaries keep working with newer config files.

pub mod defaults;

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::runner::CheckKind;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config format version.
    pub version: u32,

    /// Bracket check settings.
    pub syntax: ExtensionsConfig,

    /// Tag check settings.
    pub tags: ExtensionsConfig,

    /// Directory walking settings.
    pub walk: WalkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            syntax: ExtensionsConfig::syntax(),
            tags: ExtensionsConfig::tags(),
            walk: WalkConfig::default(),
        }
    }
}

impl Config {
    /// Extensions selected by `kind` when walking directories.
    pub fn extensions_for(&self, kind: CheckKind) -> &[String] {
        match kind {
            CheckKind::Syntax => &self.syntax.extensions,
            CheckKind::Tags => &self.tags.extensions,
        }
    }
}

/// Per-check file selection.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionsConfig {
    /// File extensions (without the dot) checked when walking directories.
    /// An empty list selects every file.
    pub extensions: Vec<String>,
}

impl ExtensionsConfig {
    fn from_defaults(exts: &[&str]) -> Self {
        Self { extensions: exts.iter().map(|e| e.to_string()).collect() }
    }

    pub(crate) fn syntax() -> Self {
        Self::from_defaults(defaults::extensions::SYNTAX)
    }

    pub(crate) fn tags() -> Self {
        Self::from_defaults(defaults::extensions::TAGS)
    }
}

/// Directory walking configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Glob patterns (relative to the walked directory) to skip.
    pub exclude: Vec<String>,

    /// Maximum directory depth.
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            exclude: defaults::walk::EXCLUDE.iter().map(|p| p.to_string()).collect(),
            max_depth: defaults::walk::MAX_DEPTH,
        }
    }
}

/// Errors loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {found} in {} (expected {expected})", path.display())]
    Version { path: PathBuf, found: u32, expected: u32 },
}

/// Keys accepted in each table, with "" for the top level.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["version", "syntax", "tags", "walk"]),
    ("syntax", &["extensions"]),
    ("tags", &["extensions"]),
    ("walk", &["exclude", "max_depth"]),
];

/// Dotted names of keys in `table` that the config schema does not know.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    let known = |section: &str| {
        KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, keys)| *keys)
            .unwrap_or_default()
    };

    for (key, value) in table {
        if !known("").contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        if let toml::Value::Table(section) = value {
            let section_keys = known(key);
            for sub in section.keys() {
                if !section_keys.contains(&sub.as_str()) {
                    unknown.push(format!("{key}.{sub}"));
                }
            }
        }
    }
    unknown
}

/// Parse config `content`; `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            found: config.version,
            expected: defaults::VERSION,
        });
    }
    Ok(config)
}

/// Load the config at `path`, warning about unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    if let Ok(table) = toml::from_str::<toml::Table>(&content) {
        for key in unknown_keys(&table) {
            tracing::warn!("unknown config key `{}` in {}", key, path.display());
        }
    }

    parse(&content, path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
