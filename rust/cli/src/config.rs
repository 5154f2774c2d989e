//! Layered configuration: defaults, then a TOML file named by
//! `HANDSCOPE_CONFIG`, then individual `HANDSCOPE_*` environment variables.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_CONFIG: &str = "HANDSCOPE_CONFIG";
pub const ENV_FORMAT: &str = "HANDSCOPE_FORMAT";
pub const ENV_UNICODE: &str = "HANDSCOPE_UNICODE";
pub const ENV_LOG: &str = "HANDSCOPE_LOG";

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::Invalid(format!("Invalid format: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    pub unicode: bool,
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            unicode: true,
            log: "warn".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub format: ValueSource,
    pub unicode: ValueSource,
    pub log: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            unicode: ValueSource::Default,
            log: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves configuration using `lookup` in place of the process environment.
pub fn load_with_sources_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = lookup(ENV_CONFIG).filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        let s = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.unicode {
            cfg.unicode = v;
            sources.unicode = ValueSource::File;
        }
        if let Some(v) = f.log {
            cfg.log = v;
            sources.log = ValueSource::File;
        }
    }

    if let Some(format) = lookup(ENV_FORMAT)
        && !format.is_empty()
    {
        cfg.format = format.parse()?;
        sources.format = ValueSource::Env;
    }
    if let Some(unicode) = lookup(ENV_UNICODE)
        && !unicode.is_empty()
    {
        cfg.unicode =
            parse_bool(&unicode).ok_or_else(|| ConfigError::Invalid("Invalid unicode".into()))?;
        sources.unicode = ValueSource::Env;
    }
    if let Some(log) = lookup(ENV_LOG)
        && !log.is_empty()
    {
        cfg.log = log;
        sources.log = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    unicode: Option<bool>,
    #[serde(default)]
    log: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.log.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: log filter must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
