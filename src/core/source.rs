//! # Profile Source
//!
//! Reads profile names out of the AWS CLI config file (`~/.aws/config`).
//!
//! The file is INI: `[profile dev]` sections name profiles, `[default]`
//! is the default profile, and `[sso-session ...]` / `[services ...]`
//! sections are shared settings rather than profiles. Only the section
//! names and each section's `role_arn` matter here, so the parser is a
//! line scanner rather than a full INI implementation. Like the AWS CLI it
//! tolerates a leading byte order mark and trailing `#` / `;` comments on
//! headers and values.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::state::Profile;

/// Name of the section holding keys that appear before any header.
const IMPLICIT_SECTION: &str = "DEFAULT";

/// Keys that make the implicit section a usable `default` profile.
const DEFAULT_PROFILE_KEYS: [&str; 3] = ["aws_access_key_id", "sso_session", "role_arn"];

/// Section prefixes that never name a profile.
const NON_PROFILE_PREFIXES: [&str; 2] = ["sso-session ", "services "];

/// Anything that can produce the list of selectable profiles.
pub trait ProfileSource {
    fn load(&self) -> Result<Vec<Profile>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    /// No home directory to find `~/.aws/config` in.
    NoHomeDir,
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NoHomeDir => write!(f, "could not determine the home directory"),
            SourceError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::NoHomeDir => None,
            SourceError::Read { source, .. } => Some(source),
        }
    }
}

/// Returns the path to `~/.aws/config`.
pub fn default_aws_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".aws").join("config"))
}

/// The AWS CLI config file as a profile source.
pub struct AwsConfigFile {
    path: Option<PathBuf>,
}

impl AwsConfigFile {
    /// `None` means the location could not be determined.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ProfileSource for AwsConfigFile {
    fn load(&self) -> Result<Vec<Profile>, SourceError> {
        let path = self.path.as_ref().ok_or(SourceError::NoHomeDir)?;
        let contents = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        let profiles = parse_profiles(&contents);
        info!("Loaded {} profiles from {}", profiles.len(), path.display());
        Ok(profiles)
    }
}

struct Section<'a> {
    name: &'a str,
    keys: Vec<(&'a str, &'a str)>,
}

impl Section<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.keys.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

/// Cut a trailing `# ...` or `; ...` comment. The marker only counts after
/// whitespace, so `arn:aws:...;x` or `a#b` stay intact.
fn strip_inline_comment(value: &str) -> &str {
    let end = value
        .char_indices()
        .find(|&(i, c)| (c == '#' || c == ';') && value[..i].ends_with(char::is_whitespace))
        .map_or(value.len(), |(i, _)| i);
    &value[..end]
}

/// Split INI text into sections in order of first appearance. Repeated
/// headers add to the earlier section.
fn parse_sections(contents: &str) -> Vec<Section<'_>> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut sections = vec![Section {
        name: IMPLICIT_SECTION,
        keys: Vec::new(),
    }];
    let mut current = 0;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            // Anything after the closing bracket is a comment
            let Some((header, _)) = rest.split_once(']') else {
                debug!("Skipping unterminated section header: {line}");
                continue;
            };
            let name = header.trim();
            current = match sections.iter().position(|s| s.name == name) {
                Some(index) => index,
                None => {
                    sections.push(Section {
                        name,
                        keys: Vec::new(),
                    });
                    sections.len() - 1
                }
            };
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => sections[current]
                .keys
                .push((key.trim(), strip_inline_comment(value).trim())),
            None => debug!("Skipping unrecognized config line: {line}"),
        }
    }

    sections
}

/// Extract the selectable profiles from the contents of an AWS config file.
pub fn parse_profiles(contents: &str) -> Vec<Profile> {
    parse_sections(contents)
        .iter()
        .filter_map(|section| {
            let name = if section.name == IMPLICIT_SECTION {
                if !DEFAULT_PROFILE_KEYS.iter().any(|k| section.get(k).is_some()) {
                    return None;
                }
                "default"
            } else if let Some(name) = section.name.strip_prefix("profile ") {
                name.trim()
            } else if NON_PROFILE_PREFIXES.iter().any(|p| section.name.starts_with(p)) {
                return None;
            } else {
                section.name
            };

            if name.is_empty() {
                return None;
            }

            Some(Profile {
                name: name.to_string(),
                role_arn: section
                    .get("role_arn")
                    .filter(|arn| !arn.is_empty())
                    .map(str::to_string),
            })
        })
        .collect()
}
