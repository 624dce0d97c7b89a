//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "exptrack")]
#[command(about = "Track item expiration dates in an interactive terminal session", version)]
pub(crate) struct Cli {
    /// Seed an item before the session starts (repeatable)
    #[arg(short, long = "item", value_name = "NAME@YYYY-MM-DD")]
    pub(crate) items: Vec<String>,

    /// Render listings as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long)]
    pub(crate) yes: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    pub(crate) debug: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub(crate) config: Option<PathBuf>,

    /// Ignore configuration files
    #[arg(long)]
    pub(crate) no_config: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them unset
        if !self.json && config.json {
            self.json = true;
        }
        if !self.yes && config.yes {
            self.yes = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // Config items seed first, then CLI items
        let mut items: Vec<String> = config
            .items
            .iter()
            .map(|item| format!("{}@{}", item.name, item.date))
            .collect();
        items.append(&mut self.items);
        self.items = items;

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Split `NAME@DATE` on the last `@`, so names may contain `@`
pub(crate) fn split_item(raw: &str) -> Result<(&str, &str), AppError> {
    raw.rsplit_once('@').ok_or_else(|| AppError::InvalidSeed {
        input: raw.to_string(),
    })
}
