//! Configuration management for the Z-LANG checker.
//!
//! Handles:
//! - Command-line argument parsing for both binaries
//! - Discovery and parsing of `.zlang.toml` / user config files
//! - Logger initialisation
//!
//! Precedence is CLI flags, then the config file, then built-in defaults.
//! Only presentation is configurable; the rule set is fixed.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{HighlightGeometry, OutputFormat};

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".zlang.toml";

/// Command-line arguments for the checker
#[derive(Debug, Clone, Parser)]
#[command(name = "zlang-check")]
#[command(about = "Report line-level syntax errors in Z-LANG source")]
#[command(version)]
pub struct CheckArgs {
    /// Source file to check; reads stdin when omitted
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Pretty-print JSON output")]
    pub pretty: bool,

    /// Explicit configuration file; disables discovery
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG when set
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Command-line arguments for the language server
#[derive(Debug, Clone, Parser)]
#[command(name = "zlang-ls")]
#[command(about = "Language server for Z-LANG files")]
#[command(version)]
pub struct ServerArgs {
    /// Log level, overridden by RUST_LOG when set
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// On-disk TOML layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
    pub line_height: Option<f64>,
    pub vertical_offset: Option<f64>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    pub pretty: bool,
    pub geometry: HighlightGeometry,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            geometry: HighlightGeometry::default(),
            source: None,
        }
    }
}

impl Config {
    /// Create checker configuration from explicit arguments
    pub fn from_check_args(args: &CheckArgs) -> Result<Self> {
        let mut config = Self::load(args.config.as_deref())?;
        if let Some(format) = args.format {
            config.format = format;
        }
        if args.pretty {
            config.pretty = true;
        }
        Ok(config)
    }

    /// Read an explicit config file, or discover one from the working directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let cwd =
                    std::env::current_dir().context("Could not determine working directory")?;
                discover_config_file(&cwd)
            }
        };

        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                let file = ConfigFile::load(&path)?;
                Ok(Self::default().with_file(file, path))
            }
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Layer a parsed config file over the current values
    pub fn with_file(mut self, file: ConfigFile, source: PathBuf) -> Self {
        let report = file.report;
        if let Some(format) = report.format {
            self.format = format;
        }
        if let Some(pretty) = report.pretty {
            self.pretty = pretty;
        }
        if let Some(line_height) = report.line_height {
            self.geometry.line_height = line_height;
        }
        if let Some(vertical_offset) = report.vertical_offset {
            self.geometry.vertical_offset = vertical_offset;
        }
        self.source = Some(source);
        self
    }
}

/// Project file in `dir` first, then the user config directory
pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
    let project = dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|config_dir| config_dir.join("zlang").join("config.toml"))
        .filter(|user| user.is_file())
}

/// Initialise `env_logger`; `RUST_LOG` wins over `level`
pub fn init_logging(level: Option<&str>, default_level: &str) {
    let filter = level.unwrap_or(default_level);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}
