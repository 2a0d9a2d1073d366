//! The module descriptor capability interface.

use kiln_env::{Environment, OptionKey, OptionValue, Platform};
use serde::Serialize;

use crate::error::ConfigureError;

/// Directory, relative to the module, holding documentation sources.
pub const DEFAULT_DOC_PATH: &str = "doc_classes";

/// An option a module reads, with the default seeded before gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub key: OptionKey,
    pub help: &'static str,
    /// `None` leaves the option unset until the user provides it.
    pub default: Option<OptionValue>,
}

impl OptionSpec {
    pub fn new(key: OptionKey, help: &'static str, default: impl Into<OptionValue>) -> Self {
        Self {
            key,
            help,
            default: Some(default.into()),
        }
    }

    /// An option with no default.
    pub fn unset(key: OptionKey, help: &'static str) -> Self {
        Self {
            key,
            help,
            default: None,
        }
    }
}

/// One optional build unit.
///
/// `can_build` receives a shared borrow and must be a pure function of its
/// arguments. `configure` is called at most once per build, and only after
/// `can_build` returned true for the same environment; any mutation it makes
/// must be idempotent.
pub trait ModuleDescriptor: Send + Sync {
    /// Registry name. Also the module's directory and the suffix of its
    /// `module_<name>_enabled` toggle.
    fn name(&self) -> &'static str;

    /// Options this module reads.
    fn options(&self) -> Vec<OptionSpec> {
        Vec::new()
    }

    /// Capability gate.
    fn can_build(&self, env: &Environment, platform: &Platform) -> bool;

    /// Configure hook. Errors abort the whole build.
    fn configure(&self, _env: &mut Environment) -> Result<(), ConfigureError> {
        Ok(())
    }

    /// Documentation classes owned by this module, in registration order.
    fn doc_classes(&self) -> &'static [&'static str] {
        &[]
    }

    /// Documentation source directory, relative to the module.
    fn doc_path(&self) -> &'static str {
        DEFAULT_DOC_PATH
    }
}
