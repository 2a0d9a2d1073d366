//! Collection and checking of module documentation surfaces.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use kiln_modules::ModuleRegistry;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{DocsError, Result};

/// Documentation classes owned by one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntry {
    pub module: String,
    /// Directory relative to the module that holds the class sources.
    pub doc_path: String,
    pub classes: Vec<String>,
}

impl DocEntry {
    /// Directory holding this module's sources under `modules_root`.
    pub fn source_dir(&self, modules_root: &Path) -> PathBuf {
        modules_root.join(&self.module).join(&self.doc_path)
    }

    /// Expected source file for `class`.
    pub fn source_file(&self, modules_root: &Path, class: &str) -> PathBuf {
        self.source_dir(modules_root).join(format!("{class}.xml"))
    }
}

/// A declared class whose source file is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingDoc {
    pub module: String,
    pub class: String,
    pub expected: PathBuf,
}

/// Ordered documentation index over a set of modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocIndex {
    pub entries: Vec<DocEntry>,
}

impl DocIndex {
    /// Collect every registered module's documentation surface, in registry
    /// order. Modules without doc classes are skipped.
    pub fn collect(registry: &ModuleRegistry) -> Result<Self> {
        Self::collect_filtered(registry, |_| true)
    }

    /// Collect only the modules accepted by `keep`, e.g. the modules a build
    /// plan included.
    pub fn collect_filtered<F>(registry: &ModuleRegistry, mut keep: F) -> Result<Self>
    where
        F: FnMut(&str) -> bool,
    {
        let mut owners: HashMap<&'static str, &'static str> = HashMap::new();
        let mut entries = Vec::new();

        for descriptor in registry.iter() {
            let module = descriptor.name();
            if !keep(module) {
                continue;
            }
            let classes = descriptor.doc_classes();
            if classes.is_empty() {
                continue;
            }
            for &class in classes {
                if let Some(first) = owners.insert(class, module) {
                    return Err(DocsError::DuplicateClass {
                        class: class.to_string(),
                        first: first.to_string(),
                        second: module.to_string(),
                    });
                }
            }
            debug!(module, classes = classes.len(), "collected doc classes");
            entries.push(DocEntry {
                module: module.to_string(),
                doc_path: descriptor.doc_path().to_string(),
                classes: classes.iter().map(|c| c.to_string()).collect(),
            });
        }

        Ok(Self { entries })
    }

    /// All classes in index order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.classes.iter().map(String::as_str))
    }

    /// Module owning `class`, if any.
    pub fn owner(&self, class: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.classes.iter().any(|c| c == class))
            .map(|e| e.module.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report declared classes without a `<doc_path>/<Class>.xml` source under
    /// `modules_root/<module>/`.
    pub fn check(&self, modules_root: &Path) -> Result<Vec<MissingDoc>> {
        if !modules_root.is_dir() {
            return Err(DocsError::RootNotFound {
                path: modules_root.to_path_buf(),
            });
        }

        let mut missing = Vec::new();
        for entry in &self.entries {
            for class in &entry.classes {
                let expected = entry.source_file(modules_root, class);
                if !expected.is_file() {
                    warn!(module = %entry.module, %class, path = %expected.display(), "missing doc source");
                    missing.push(MissingDoc {
                        module: entry.module.clone(),
                        class: class.clone(),
                        expected,
                    });
                }
            }
        }
        Ok(missing)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DocIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} ({}/{})", entry.module, entry.module, entry.doc_path)?;
            for class in &entry.classes {
                writeln!(f, "  {class}")?;
            }
        }
        Ok(())
    }
}
