//! Build configuration accumulated by module configure hooks.
//!
//! All mutators are idempotent: registering the same include path, library or
//! define twice leaves the configuration unchanged.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

/// A preprocessor definition (`NAME` or `NAME=VALUE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Define {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// Include paths, defines and link libraries, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,
    #[serde(default)]
    pub defines: Vec<Define>,
    #[serde(default)]
    pub link_libs: Vec<String>,
}

impl BuildConfig {
    pub fn is_empty(&self) -> bool {
        self.include_paths.is_empty() && self.defines.is_empty() && self.link_libs.is_empty()
    }

    /// Append an include path unless already present.
    pub fn add_include_path(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if !self.include_paths.iter().any(|p| p == path) {
            self.include_paths.push(path.to_path_buf());
        }
    }

    /// Append a link library unless already present.
    pub fn add_link_lib(&mut self, lib: impl Into<String>) {
        let lib = lib.into();
        if !self.link_libs.contains(&lib) {
            self.link_libs.push(lib);
        }
    }

    /// Define a preprocessor symbol.
    ///
    /// Re-defining with the same value is a no-op; a different value is
    /// rejected with [`EnvError::ConflictingDefine`].
    pub fn define(&mut self, name: impl Into<String>, value: Option<&str>) -> Result<()> {
        let name = name.into();
        let value = value.map(str::to_string);
        if let Some(existing) = self.defines.iter().find(|d| d.name == name) {
            if existing.value == value {
                return Ok(());
            }
            return Err(EnvError::ConflictingDefine {
                name,
                existing: existing.value.clone(),
                requested: value,
            });
        }
        self.defines.push(Define { name, value });
        Ok(())
    }

    /// Look up a define by name.
    pub fn define_value(&self, name: &str) -> Option<&Define> {
        self.defines.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_paths_dedupe_in_order() {
        let mut cfg = BuildConfig::default();
        cfg.add_include_path("thirdparty/a");
        cfg.add_include_path("thirdparty/b");
        cfg.add_include_path("thirdparty/a");
        assert_eq!(
            cfg.include_paths,
            vec![PathBuf::from("thirdparty/a"), PathBuf::from("thirdparty/b")]
        );
    }

    #[test]
    fn link_libs_dedupe() {
        let mut cfg = BuildConfig::default();
        cfg.add_link_lib("curl");
        cfg.add_link_lib("curl");
        assert_eq!(cfg.link_libs, vec!["curl".to_string()]);
    }

    #[test]
    fn define_same_value_is_idempotent() {
        let mut cfg = BuildConfig::default();
        cfg.define("CURL_STATICLIB", None).unwrap();
        cfg.define("CURL_STATICLIB", None).unwrap();
        cfg.define("LEVEL", Some("2")).unwrap();
        cfg.define("LEVEL", Some("2")).unwrap();
        assert_eq!(cfg.defines.len(), 2);
        assert_eq!(cfg.define_value("LEVEL").unwrap().to_string(), "LEVEL=2");
    }

    #[test]
    fn define_conflict_is_rejected() {
        let mut cfg = BuildConfig::default();
        cfg.define("LEVEL", Some("1")).unwrap();
        let err = cfg.define("LEVEL", Some("2")).unwrap_err();
        assert!(matches!(err, EnvError::ConflictingDefine { .. }));
        assert_eq!(cfg.define_value("LEVEL").unwrap().value.as_deref(), Some("1"));
    }

    #[test]
    fn empty_config() {
        let mut cfg = BuildConfig::default();
        assert!(cfg.is_empty());
        cfg.add_link_lib("m");
        assert!(!cfg.is_empty());
    }
}
