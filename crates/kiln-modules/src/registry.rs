//! Explicit module registry.

use std::collections::BTreeMap;
use std::fmt;

use crate::builtin;
use crate::descriptor::ModuleDescriptor;
use crate::error::{ModuleError, Result};

/// A closed, enumerable set of module descriptors keyed by name.
///
/// Iteration is in name order, which is also the order the orchestrator
/// evaluates modules in.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<&'static str, Box<dyn ModuleDescriptor>>,
}

impl ModuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry populated with every built-in engine module.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        builtin::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Register a descriptor. Names must be unique, non-empty and made of
    /// lowercase ASCII letters, digits and underscores.
    pub fn register<D>(&mut self, descriptor: D) -> Result<()>
    where
        D: ModuleDescriptor + 'static,
    {
        self.register_boxed(Box::new(descriptor))
    }

    /// Register an already boxed descriptor.
    pub fn register_boxed(&mut self, descriptor: Box<dyn ModuleDescriptor>) -> Result<()> {
        let name = descriptor.name();
        validate_name(name)?;
        if descriptor.doc_path().is_empty() {
            return Err(ModuleError::EmptyDocPath {
                name: name.to_string(),
            });
        }
        if self.modules.contains_key(name) {
            return Err(ModuleError::DuplicateModule {
                name: name.to_string(),
            });
        }
        self.modules.insert(name, descriptor);
        Ok(())
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Result<&dyn ModuleDescriptor> {
        self.modules
            .get(name)
            .map(|d| d.as_ref())
            .ok_or_else(|| ModuleError::UnknownModule {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ModuleDescriptor> {
        self.modules.values().map(|d| d.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ModuleError::InvalidName {
            name: name.to_string(),
            detail: "name is empty".to_string(),
        });
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
    {
        return Err(ModuleError::InvalidName {
            name: name.to_string(),
            detail: format!("character {c:?} is not allowed"),
        });
    }
    Ok(())
}
