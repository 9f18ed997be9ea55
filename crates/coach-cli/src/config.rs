//! Configuration file management for coach.
//!
//! Provides a TOML-based config file at `~/.config/coach/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use coach_core::plan::{DEFAULT_PLAN_DAYS, ParseOptions};

pub const ENV_PLAN_DAYS: &str = "COACH_PLAN_DAYS";
pub const ENV_FILL_MISSING_MEALS: &str = "COACH_FILL_MISSING_MEALS";
pub const ENV_OUTPUT_FORMAT: &str = "COACH_OUTPUT_FORMAT";

// -----------------------------------------------------------------------
// Output format
// -----------------------------------------------------------------------

/// How `coach parse` prints a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Text => "text",
            Self::Json => "json",
        };
        f.write_str(s)
    }
}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(OutputFormatParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`OutputFormat`] string.
#[derive(Debug, Clone, Error)]
#[error("invalid output format {0:?} (expected text or json)")]
pub struct OutputFormatParseError(pub String);

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseSection {
    /// Plan length in days.
    #[serde(default = "default_days")]
    pub days: usize,
    /// Give empty meals a placeholder item.
    #[serde(default = "default_fill_missing_meals")]
    pub fill_missing_meals: bool,
}

impl Default for ParseSection {
    fn default() -> Self {
        Self {
            days: default_days(),
            fill_missing_meals: default_fill_missing_meals(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_days() -> usize {
    DEFAULT_PLAN_DAYS
}

fn default_fill_missing_meals() -> bool {
    true
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the coach config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/coach` or `~/.config/coach`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("coach");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("coach")
}

/// Return the path to the coach config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Load the config file if one exists. A present but malformed file is an error.
pub fn load_config_if_present() -> Result<Option<ConfigFile>> {
    if !config_path().exists() {
        tracing::debug!(path = %config_path().display(), "no config file");
        return Ok(None);
    }
    load_config().map(Some)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Values given on the command line; `None` / `false` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub days: Option<usize>,
    pub format: Option<OutputFormat>,
    pub no_fill: bool,
}

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct CoachConfig {
    pub parse_options: ParseOptions,
    pub format: OutputFormat,
}

impl CoachConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - Days: `--days` > `COACH_PLAN_DAYS` > `parse.days` > 7
    /// - Fill: `--no-fill` > `COACH_FILL_MISSING_MEALS` > `parse.fill_missing_meals` > true
    /// - Format: `--format` > `COACH_OUTPUT_FORMAT` > `output.format` > text
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        let file_config = load_config_if_present()?;
        Self::resolve_with(cli, file_config.as_ref())
    }

    fn resolve_with(cli: &CliOverrides, file_config: Option<&ConfigFile>) -> Result<Self> {
        let days = match cli.days {
            Some(days) => days,
            None => match env_value::<usize>(ENV_PLAN_DAYS)? {
                Some(days) => days,
                None => file_config.map_or(DEFAULT_PLAN_DAYS, |cfg| cfg.parse.days),
            },
        };

        let fill_missing_meals = if cli.no_fill {
            false
        } else {
            match env_value::<bool>(ENV_FILL_MISSING_MEALS)? {
                Some(fill) => fill,
                None => file_config.is_none_or(|cfg| cfg.parse.fill_missing_meals),
            }
        };

        let format = match cli.format {
            Some(format) => format,
            None => match env_value::<OutputFormat>(ENV_OUTPUT_FORMAT)? {
                Some(format) => format,
                None => file_config.map(|cfg| cfg.output.format).unwrap_or_default(),
            },
        };

        let parse_options =
            ParseOptions::new(days, fill_missing_meals).context("invalid plan length")?;

        Ok(Self {
            parse_options,
            format,
        })
    }
}

/// Read and parse an env var. Unset is `Ok(None)`; unparseable is an error.
fn env_value<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} env var is invalid: {raw:?}")),
        Err(_) => Ok(None),
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
