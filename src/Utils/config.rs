//! Engine settings read from a TOML document with optional `[render]` and `[log]` sections:
//! ```toml
//! [render]
//! integer_tolerance = 1e-7
//! decimals = 3
//!
//! [log]
//! level = "debug"
//! console = true
//! file = "auto"   # timestamped name, or any path
//! ```
//! Every missing key keeps its default.
use crate::Utils::logger::default_log_file_name;
use crate::symbolic::symbolic_engine_print::RenderSettings;
use log::{LevelFilter, debug};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use toml::{Table, Value};

/// widest fixed-point precision that still says something about an f64
const MAX_DECIMALS: i64 = 17;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub console: bool,
    /// log file; `None` means console only
    pub file: Option<String>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: LevelFilter::Info,
            console: true,
            file: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub render: RenderSettings,
    pub log: LogSettings,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let document: Table = toml::from_str(text)?;
        let mut config = EngineConfig::default();
        if let Some(section) = section(&document, "render")? {
            config.render = parse_render(section)?;
        }
        if let Some(section) = section(&document, "log")? {
            config.log = parse_log(section)?;
        }
        debug!("engine config loaded: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("reading engine config from {}", path.display());
        Self::from_toml_str(&text)
    }
}

fn section<'a>(document: &'a Table, name: &str) -> Result<Option<&'a Table>, ConfigError> {
    match document.get(name) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(other) => Err(ConfigError::invalid(
            name,
            format!("expected a table, found {}", other.type_str()),
        )),
    }
}

fn parse_render(table: &Table) -> Result<RenderSettings, ConfigError> {
    let mut render = RenderSettings::default();
    if let Some(value) = table.get("integer_tolerance") {
        // TOML keeps `0` and `0.0` apart; both are fine here
        let tolerance = match value {
            Value::Float(f) => *f,
            Value::Integer(i) => *i as f64,
            other => {
                return Err(ConfigError::invalid(
                    "render.integer_tolerance",
                    format!("expected a number, found {}", other.type_str()),
                ));
            }
        };
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::invalid(
                "render.integer_tolerance",
                format!("must be finite and non-negative, got {}", tolerance),
            ));
        }
        render.integer_tolerance = tolerance;
    }
    if let Some(value) = table.get("decimals") {
        let decimals = value.as_integer().ok_or_else(|| {
            ConfigError::invalid(
                "render.decimals",
                format!("expected an integer, found {}", value.type_str()),
            )
        })?;
        if !(0..=MAX_DECIMALS).contains(&decimals) {
            return Err(ConfigError::invalid(
                "render.decimals",
                format!("must lie in 0..={}, got {}", MAX_DECIMALS, decimals),
            ));
        }
        render.decimals = decimals as usize;
    }
    Ok(render)
}

fn parse_log(table: &Table) -> Result<LogSettings, ConfigError> {
    let mut log_settings = LogSettings::default();
    if let Some(value) = table.get("level") {
        let name = value.as_str().ok_or_else(|| {
            ConfigError::invalid(
                "log.level",
                format!("expected a string, found {}", value.type_str()),
            )
        })?;
        log_settings.level = LevelFilter::from_str(name)
            .map_err(|_| ConfigError::invalid("log.level", format!("unknown level {:?}", name)))?;
    }
    if let Some(value) = table.get("console") {
        log_settings.console = value.as_bool().ok_or_else(|| {
            ConfigError::invalid(
                "log.console",
                format!("expected a boolean, found {}", value.type_str()),
            )
        })?;
    }
    if let Some(value) = table.get("file") {
        let file = value.as_str().ok_or_else(|| {
            ConfigError::invalid(
                "log.file",
                format!("expected a string, found {}", value.type_str()),
            )
        })?;
        log_settings.file = match file {
            "" => None,
            "auto" => Some(default_log_file_name()),
            path => Some(path.to_string()),
        };
    }
    Ok(log_settings)
}
