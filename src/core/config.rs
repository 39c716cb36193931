//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.awsprof/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The logger is configured from the resolved values, so nothing here logs
//! directly. Loading reports a [`ConfigOrigin`] and resolution collects
//! `warnings`; `main` logs both once the logger is up.

use clap::ValueEnum;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ShellFormat;
use crate::core::source::default_aws_config_path;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AwsprofConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub env_var: Option<String>,
    pub format: Option<ShellFormat>,
    pub show_role_arn: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AwsConfig {
    pub config_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ENV_VAR: &str = "AWS_DEFAULT_PROFILE";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Variable the chosen profile is exported as, and read back from for
    /// the initial cursor position.
    pub env_var: String,
    pub format: ShellFormat,
    pub show_role_arn: bool,
    /// `None` when no home directory could be found.
    pub aws_config_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// Rejected env values, in the order they were read.
    pub warnings: Vec<String>,
}

/// Settings given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub env_var: Option<String>,
    pub format: Option<ShellFormat>,
    pub aws_config_file: Option<PathBuf>,
    pub show_role_arn: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Where the loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No file existed; a commented default was written here.
    Generated(PathBuf),
    /// No file existed and the default could not be written.
    GenerateFailed { path: PathBuf, reason: String },
    /// No home directory, so built-in defaults only.
    NoHomeDir,
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::GenerateFailed { path, reason } => {
                warn!("No config file found, could not write default at {}: {}", path.display(), reason)
            }
            ConfigOrigin::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AwsprofConfig,
    pub origin: ConfigOrigin,
}

/// Returns `~/.awsprof`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".awsprof"))
}

/// Returns the path to `~/.awsprof/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.awsprof/config.toml`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LoadedConfig {
            config: AwsprofConfig::default(),
            origin: ConfigOrigin::NoHomeDir,
        }),
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AwsprofConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::GenerateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok(LoadedConfig {
            config: AwsprofConfig::default(),
            origin,
        });
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AwsprofConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(LoadedConfig {
        config,
        origin: ConfigOrigin::File(path.to_path_buf()),
    })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# awsprof Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# env_var = "AWS_DEFAULT_PROFILE"    # Or set AWSPROF_ENV_VAR
# format = "export"                  # "export", "fish" or "plain"; or AWSPROF_FORMAT
# show_role_arn = false              # Start with role ARNs visible

# [aws]
# config_file = "~/.aws/config"      # Or set AWS_CONFIG_FILE

# [logging]
# file = "~/.awsprof/awsprof.log"
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AwsprofConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with(
    config: &AwsprofConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Env var name: CLI → env → config → default
    let env_var = cli
        .env_var
        .clone()
        .or_else(|| env("AWSPROF_ENV_VAR"))
        .or_else(|| config.general.env_var.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENV_VAR.to_string());

    // Output format: CLI → env → config → default
    let format = cli
        .format
        .or_else(|| {
            env("AWSPROF_FORMAT").and_then(|raw| match ShellFormat::from_str(&raw, true) {
                Ok(format) => Some(format),
                Err(e) => {
                    warnings.push(format!("Ignoring AWSPROF_FORMAT: {e}"));
                    None
                }
            })
        })
        .or(config.general.format)
        .unwrap_or_default();

    // AWS config file: CLI → env → config → ~/.aws/config
    let aws_config_file = cli
        .aws_config_file
        .clone()
        .or_else(|| env("AWS_CONFIG_FILE").map(PathBuf::from))
        .or_else(|| config.aws.config_file.as_deref().map(expand_home))
        .or_else(default_aws_config_path);

    // Log file: config → ~/.awsprof/awsprof.log
    let log_file = config
        .logging
        .file
        .as_deref()
        .map(expand_home)
        .or_else(|| config_dir().map(|d| d.join("awsprof.log")));

    // Log level: env → config → default
    let log_level = env("AWSPROF_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|raw| match raw.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warnings.push(format!("Unknown log level '{raw}', using {DEFAULT_LOG_LEVEL}"));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        env_var,
        format,
        show_role_arn: cli.show_role_arn || config.general.show_role_arn.unwrap_or(false),
        aws_config_file,
        log_file,
        log_level,
        warnings,
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}
