use std::fs;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::defaults;
use crate::logging::LogFormat;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{AllowList, OriginMatcher, PatternError};

/// Command line surface of the `bookmarks-api` binary.
///
/// Every option falls back to its environment variable, then to the config
/// file, then to the built-in default.
#[derive(Debug, Default, Parser)]
#[command(name = "bookmarks-api", version, about)]
pub struct Cli {
    /// TOML file holding any of the options below.
    #[arg(long, env = "BOOKMARKS_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// IP address to listen on.
    #[arg(long, env = "BOOKMARKS_API_HOST")]
    pub host: Option<String>,

    /// TCP port to listen on.
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,

    /// Origins approved by exact match.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Option<Vec<String>>,

    /// Domain suffix admitting `https://<build>.<suffix>` preview deployments.
    #[arg(long, env = "PREVIEW_ORIGIN_SUFFIX")]
    pub preview_suffix: Option<String>,

    /// Turn off preview-deployment matching.
    #[arg(long)]
    pub no_preview: bool,

    /// Extra origin expressions, matched against the whole origin.
    #[arg(long = "origin-pattern", env = "ORIGIN_PATTERNS", value_delimiter = ' ')]
    pub origin_patterns: Option<Vec<String>>,

    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Shape of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origins: Option<Vec<String>>,
    pub preview_suffix: Option<String>,
    pub origin_patterns: Option<Vec<String>>,
    pub log_format: Option<LogFormat>,
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

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("listen host `{host}` is not an IP address")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Fully resolved, immutable settings for one server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub cors: CorsOptions,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], defaults::PORT)),
            cors: CorsOptions::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let host = cli
            .host
            .or(file.host)
            .unwrap_or_else(|| defaults::HOST.to_string());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                host: host.clone(),
                source,
            })?;
        let port = cli.port.or(file.port).unwrap_or(defaults::PORT);

        let exact = cli
            .allowed_origins
            .or(file.allowed_origins)
            .unwrap_or_else(|| defaults::ALLOWED_ORIGINS.map(String::from).to_vec());
        let mut allow_list = AllowList::new(
            exact
                .into_iter()
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty()),
        );

        let preview_suffix = if cli.no_preview {
            None
        } else {
            let suffix = cli
                .preview_suffix
                .or(file.preview_suffix)
                .unwrap_or_else(|| defaults::PREVIEW_SUFFIX.to_string());
            let suffix = suffix.trim();
            (!suffix.is_empty()).then(|| suffix.to_string())
        };
        if let Some(suffix) = preview_suffix {
            allow_list.push(OriginMatcher::preview_suffix(suffix));
        }

        for pattern in cli
            .origin_patterns
            .or(file.origin_patterns)
            .unwrap_or_default()
            .iter()
            .map(|pattern| pattern.trim())
            .filter(|pattern| !pattern.is_empty())
        {
            allow_list.push(OriginMatcher::pattern_str(pattern)?);
        }

        let cors = CorsOptions {
            allow_list,
            ..CorsOptions::default()
        };
        cors.validate()?;

        Ok(Self {
            listen: SocketAddr::new(ip, port),
            cors,
            log_format: cli.log_format.or(file.log_format).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
