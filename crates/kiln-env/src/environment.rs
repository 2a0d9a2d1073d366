//! The shared build environment.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::error::{EnvError, Result};
use crate::option::{OptionKey, OptionValue};

/// Options and accumulated configuration for one build invocation.
///
/// Capability gates only ever see `&Environment`; configure hooks receive
/// `&mut Environment` after their gate has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    options: BTreeMap<OptionKey, OptionValue>,
    config: BuildConfig,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value.
    pub fn set(&mut self, key: impl Into<OptionKey>, value: impl Into<OptionValue>) {
        self.options.insert(key.into(), value.into());
    }

    /// Builder-style [`Environment::set`].
    pub fn with(mut self, key: impl Into<OptionKey>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an option only if it has no value yet. Returns whether it was set.
    pub fn set_default(&mut self, key: impl Into<OptionKey>, value: impl Into<OptionValue>) -> bool {
        let key = key.into();
        if self.options.contains_key(&key) {
            return false;
        }
        self.options.insert(key, value.into());
        true
    }

    pub fn get(&self, key: &OptionKey) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn contains(&self, key: &OptionKey) -> bool {
        self.options.contains_key(key)
    }

    /// Whether a boolean feature option is enabled. Missing options are disabled.
    pub fn flag(&self, key: &OptionKey) -> bool {
        self.options.get(key).is_some_and(OptionValue::is_enabled)
    }

    /// Like [`Environment::flag`], with an explicit value for missing options.
    pub fn flag_or(&self, key: &OptionKey, default: bool) -> bool {
        self.options.get(key).map_or(default, OptionValue::is_enabled)
    }

    /// Read a string option.
    pub fn string(&self, key: &OptionKey) -> Result<Option<&str>> {
        match self.options.get(key) {
            None => Ok(None),
            Some(OptionValue::Str(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(EnvError::OptionType {
                key: key.to_string(),
                expected: "string",
                actual: other.kind(),
            }),
        }
    }

    /// Read a path option. String values are accepted as paths.
    pub fn path(&self, key: &OptionKey) -> Result<Option<&Path>> {
        match self.options.get(key) {
            None => Ok(None),
            Some(OptionValue::Path(p)) => Ok(Some(p.as_path())),
            Some(OptionValue::Str(s)) => Ok(Some(Path::new(s))),
            Some(other) => Err(EnvError::OptionType {
                key: key.to_string(),
                expected: "path",
                actual: other.kind(),
            }),
        }
    }

    /// All options, ordered by key.
    pub fn options(&self) -> impl Iterator<Item = (&OptionKey, &OptionValue)> {
        self.options.iter()
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BuildConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const OPENXR: OptionKey = OptionKey::new("openxr");

    #[test]
    fn missing_flag_is_disabled() {
        let env = Environment::new();
        assert!(!env.flag(&OPENXR));
        assert!(env.flag_or(&OPENXR, true));
    }

    #[test]
    fn set_and_read_flag() {
        let env = Environment::new().with("openxr", true);
        assert!(env.flag(&OPENXR));
        let env = env.with("openxr", false);
        assert!(!env.flag(&OPENXR));
    }

    #[test]
    fn set_default_does_not_override() {
        let mut env = Environment::new().with("openxr", false);
        assert!(!env.set_default(OPENXR, true));
        assert!(!env.flag(&OPENXR));
        assert!(env.set_default("tools", true));
        assert!(env.flag(&OptionKey::new("tools")));
    }

    #[test]
    fn typed_reads() {
        let env = Environment::new()
            .with("target", "release")
            .with("prefix", PathBuf::from("/opt/curl"))
            .with("tools", true);
        assert_eq!(
            env.string(&OptionKey::new("target")).unwrap(),
            Some("release")
        );
        assert_eq!(
            env.path(&OptionKey::new("prefix")).unwrap(),
            Some(Path::new("/opt/curl"))
        );
        assert_eq!(
            env.path(&OptionKey::new("target")).unwrap(),
            Some(Path::new("release"))
        );
        assert!(env.string(&OptionKey::new("tools")).is_err());
        assert!(env.path(&OptionKey::new("tools")).is_err());
        assert_eq!(env.string(&OptionKey::new("missing")).unwrap(), None);
    }

    #[test]
    fn options_iterate_in_key_order() {
        let env = Environment::new().with("b", true).with("a", false);
        let keys: Vec<_> = env.options().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn config_mutation_is_visible() {
        let mut env = Environment::new();
        env.config_mut().add_include_path("thirdparty/cmark/src");
        assert_eq!(env.config().include_paths.len(), 1);
    }
}
