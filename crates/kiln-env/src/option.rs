//! Typed build options.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

/// Identity of a build option.
///
/// Descriptors declare their keys as constants (`OptionKey::new("openxr")`);
/// keys built from user input use [`OptionKey::owned`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(Cow<'static, str>);

impl OptionKey {
    /// A key known at compile time.
    pub const fn new(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// A key from runtime input.
    pub fn owned(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    /// The per-module toggle the orchestrator checks before gating.
    pub fn module_enabled(module: &str) -> Self {
        Self::owned(format!("module_{module}_enabled"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        Self::owned(s)
    }
}

/// A build option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    Path(PathBuf),
}

impl OptionValue {
    /// Name of the value kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Str(_) => "string",
            OptionValue::Path(_) => "path",
        }
    }

    /// Interpret command-line text. Boolean spellings become [`OptionValue::Bool`],
    /// everything else stays a string.
    pub fn parse(text: &str) -> Self {
        match parse_bool(text) {
            Some(b) => OptionValue::Bool(b),
            None => OptionValue::Str(text.to_string()),
        }
    }

    /// Truthiness used by feature gates. Strings accept the boolean spellings;
    /// any other string, and paths, count as disabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Str(s) => parse_bool(s).unwrap_or(false),
            OptionValue::Path(_) => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => f.write_str("yes"),
            OptionValue::Bool(false) => f.write_str("no"),
            OptionValue::Str(s) => f.write_str(s),
            OptionValue::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<PathBuf> for OptionValue {
    fn from(p: PathBuf) -> Self {
        OptionValue::Path(p)
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" | "1" => Some(true),
        "no" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Split a `KEY=VALUE` assignment from the command line.
pub fn parse_assignment(input: &str) -> Result<(OptionKey, OptionValue)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| EnvError::InvalidAssignment {
            input: input.to_string(),
        })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(EnvError::InvalidAssignment {
            input: input.to_string(),
        });
    }
    Ok((OptionKey::owned(key), OptionValue::parse(value)))
}
