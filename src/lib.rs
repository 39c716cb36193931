//! awsprof library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the chosen profile is printed for the invoking shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellFormat {
    /// `export AWS_DEFAULT_PROFILE=name` (bash, zsh, sh)
    #[default]
    Export,
    /// `set -gx AWS_DEFAULT_PROFILE name`
    Fish,
    /// The bare profile name
    Plain,
}
