//! Application configuration resolved from CLI arguments and an optional TOML file.
//!
//! TOML values override CLI values where present; anything left unset falls back
//! to the defaults below.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    lookup::omdb::DEFAULT_OMDB_ENDPOINT,
    site::{SiteSettings, DEFAULT_PAGE_TITLE},
};

pub const DEFAULT_DB_PATH: &str = "movies.db";
pub const DEFAULT_TEMPLATE_PATH: &str = "index_template.html";
pub const DEFAULT_OUTPUT_PATH: &str = "movies.html";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Values taken from the command line and environment.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub omdb_endpoint: Option<String>,
    pub template_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub db_path: Option<String>,
    #[serde(default)]
    pub omdb: OmdbFileConfig,
    #[serde(default)]
    pub site: SiteFileConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OmdbFileConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteFileConfig {
    pub template_path: Option<String>,
    pub output_path: Option<String>,
    pub page_title: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Lookup settings; absent when no API key is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub lookup: Option<LookupSettings>,
    pub site: SiteSettings,
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Self {
        let file = file_config.unwrap_or_default();

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let api_key = [file.omdb.api_key, cli.api_key.clone()]
            .into_iter()
            .flatten()
            .find(|key| !key.trim().is_empty());
        let endpoint = file
            .omdb
            .endpoint
            .or_else(|| cli.omdb_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_OMDB_ENDPOINT.to_string());
        let timeout = Duration::from_secs(
            file.omdb
                .timeout_secs
                .unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS),
        );
        let lookup = api_key.map(|api_key| LookupSettings {
            endpoint,
            api_key,
            timeout,
        });

        let site = SiteSettings {
            template_path: file
                .site
                .template_path
                .map(PathBuf::from)
                .or_else(|| cli.template_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
            output_path: file
                .site
                .output_path
                .map(PathBuf::from)
                .or_else(|| cli.output_path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            page_title: file
                .site
                .page_title
                .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string()),
        };

        Self {
            db_path,
            lookup,
            site,
        }
    }
}
