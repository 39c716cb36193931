//! # Result Reporting
//!
//! Turns the final `Outcome` into what the invoking shell sees: one
//! machine-readable line on stdout when a profile was chosen, a diagnostic
//! on stderr otherwise, and the matching exit status.
//!
//! The shell wrapper typically runs `eval "$(awsprof)"`, so stdout must
//! carry nothing but the assignment.

use std::process::ExitCode;

use crate::ShellFormat;
use crate::core::state::{Outcome, Profile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub success: bool,
}

impl Report {
    pub fn from_outcome(
        outcome: &Outcome,
        profiles: &[Profile],
        format: ShellFormat,
        env_var: &str,
    ) -> Self {
        match outcome {
            Outcome::Selected(index) => match profiles.get(*index) {
                Some(profile) => Self::success(shell_line(format, env_var, &profile.name)),
                None => Self::failure(format!("Error: selected index {index} is out of range")),
            },
            Outcome::InitError(reason) => Self::failure(format!("Error: {reason}")),
            Outcome::EmptyCancelled => Self::failure("No AWS profiles available."),
            Outcome::Pending if profiles.is_empty() => Self::failure("No AWS profiles available."),
            Outcome::Cancelled | Outcome::Pending => Self::failure("Profile selection cancelled."),
        }
    }

    fn success(line: String) -> Self {
        Self {
            stdout: Some(line),
            stderr: None,
            success: true,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            stdout: None,
            stderr: Some(message.into()),
            success: false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Format the assignment for the given shell.
pub fn shell_line(format: ShellFormat, env_var: &str, name: &str) -> String {
    match format {
        ShellFormat::Export => format!("export {env_var}={}", shell_quote(name)),
        ShellFormat::Fish => format!("set -gx {env_var} {}", shell_quote(name)),
        ShellFormat::Plain => name.to_string(),
    }
}

/// Single-quote `value` unless every character is shell-safe.
fn shell_quote(value: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "_.@%+:/,-".contains(c);
    if !value.is_empty() && value.chars().all(is_safe) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
