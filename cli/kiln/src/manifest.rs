//! `kiln.toml` manifest parsing and project configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kiln_env::{Environment, OptionKey, OptionValue, Platform};
use serde::{Deserialize, Serialize};

/// File name searched for by [`KilnManifest::find_and_load`].
pub const MANIFEST_FILE: &str = "kiln.toml";

/// The top-level manifest structure for a kiln project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KilnManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Build defaults.
    #[serde(default)]
    pub build: BuildSection,
    /// Build options handed to module gates.
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
    /// Path-valued options.
    #[serde(default)]
    pub paths: BTreeMap<String, PathBuf>,
    /// Per-module enable toggles.
    #[serde(default)]
    pub modules: BTreeMap<String, bool>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Build defaults section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSection {
    /// Default platform token.
    #[serde(default)]
    pub platform: Option<String>,
    /// Whether editor tooling is built.
    #[serde(default)]
    pub tools: Option<bool>,
    /// Default for modules without an explicit `[modules]` entry.
    #[serde(default)]
    pub modules_enabled_by_default: Option<bool>,
}

impl KilnManifest {
    /// Search upward from `start_dir` for a `kiln.toml` file, parse and return it
    /// along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest = Self::parse(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing kiln.toml")
    }

    /// Default platform named by the manifest.
    pub fn default_platform(&self) -> Option<Platform> {
        self.build.platform.as_deref().map(Platform::from)
    }

    /// Build the environment the manifest describes.
    pub fn environment(&self) -> Environment {
        let mut env = Environment::new();
        if let Some(tools) = self.build.tools {
            env.set("tools", tools);
        }
        if let Some(default) = self.build.modules_enabled_by_default {
            env.set(kiln_plan::MODULES_ENABLED_BY_DEFAULT, default);
        }
        for (key, value) in &self.options {
            env.set(OptionKey::owned(key.as_str()), value.clone());
        }
        for (key, path) in &self.paths {
            env.set(OptionKey::owned(key.as_str()), path.clone());
        }
        for (module, enabled) in &self.modules {
            env.set(OptionKey::module_enabled(module), *enabled);
        }
        env
    }

    /// Generate the default template for `kiln init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"

[build]
platform = "linuxbsd"
tools = true
modules_enabled_by_default = true

[options]
openxr = true

[modules]
"#
        )
    }
}

/// Host platform, used when neither the command line nor the manifest names one.
pub fn host_platform() -> Platform {
    match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => Platform::LinuxBsd,
        other => Platform::from(other),
    }
}
