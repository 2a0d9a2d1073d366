//! Module gating and configuration.

use kiln_env::{BuildConfig, Environment, OptionKey, Platform};
use kiln_modules::{ModuleDescriptor, ModuleRegistry};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{PlanError, Result};

/// Default for every `module_<name>_enabled` toggle.
pub const MODULES_ENABLED_BY_DEFAULT: OptionKey = OptionKey::new("modules_enabled_by_default");

/// Why a module is or is not part of the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    /// Gate passed; the module was configured.
    Included,
    /// The module's gate returned false.
    Unsupported,
    /// Switched off by its `module_<name>_enabled` toggle; the gate was not consulted.
    Disabled,
}

impl Decision {
    pub fn is_included(self) -> bool {
        self == Decision::Included
    }
}

/// The decision for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePlan {
    pub name: String,
    pub decision: Decision,
}

/// Result of planning one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub platform: Platform,
    /// Every registered module, in registry order.
    pub modules: Vec<ModulePlan>,
    /// Configuration accumulated by the included modules' configure hooks.
    pub config: BuildConfig,
}

impl BuildPlan {
    /// Names of included modules, in configure order.
    pub fn included(&self) -> impl Iterator<Item = &str> {
        self.modules
            .iter()
            .filter(|m| m.decision.is_included())
            .map(|m| m.name.as_str())
    }

    pub fn is_included(&self, name: &str) -> bool {
        self.decision(name).is_some_and(Decision::is_included)
    }

    pub fn decision(&self, name: &str) -> Option<Decision> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.decision)
    }
}

/// Gate every registered module for `platform` and configure those included.
///
/// Declared option defaults are seeded into `env` first, without overriding
/// values already set. Gates then run against a shared borrow of `env`, so no
/// gate can observe a later module's configuration.
pub fn plan(registry: &ModuleRegistry, env: &mut Environment, platform: &Platform) -> Result<BuildPlan> {
    if !platform.is_recognized() {
        warn!(%platform, "unrecognised platform, modules gated on known platforms will be excluded");
    }

    seed_defaults(registry, env);

    let gated = gate_all(registry, env, platform);

    for (descriptor, decision) in &gated {
        if !decision.is_included() {
            continue;
        }
        debug!(module = descriptor.name(), "configuring module");
        descriptor
            .configure(env)
            .map_err(|source| PlanError::Configure {
                module: descriptor.name().to_string(),
                source,
            })?;
    }

    let modules = gated
        .into_iter()
        .map(|(descriptor, decision)| ModulePlan {
            name: descriptor.name().to_string(),
            decision,
        })
        .collect();

    let plan = BuildPlan {
        platform: platform.clone(),
        modules,
        config: env.config().clone(),
    };
    info!(
        %platform,
        included = plan.included().count(),
        total = plan.modules.len(),
        "build plan ready"
    );
    Ok(plan)
}

fn seed_defaults(registry: &ModuleRegistry, env: &mut Environment) {
    for descriptor in registry.iter() {
        for spec in descriptor.options() {
            let Some(default) = spec.default else {
                continue;
            };
            let key = spec.key.clone();
            if env.set_default(spec.key, default) {
                debug!(module = descriptor.name(), option = %key, "seeded option default");
            }
        }
    }
}

fn gate_all<'r>(
    registry: &'r ModuleRegistry,
    env: &Environment,
    platform: &Platform,
) -> Vec<(&'r dyn ModuleDescriptor, Decision)> {
    let enabled_by_default = env.flag_or(&MODULES_ENABLED_BY_DEFAULT, true);

    registry
        .iter()
        .map(|descriptor| {
            let name = descriptor.name();
            let toggle = OptionKey::module_enabled(name);
            let decision = if !env.flag_or(&toggle, enabled_by_default) {
                Decision::Disabled
            } else {
                let supported = descriptor.can_build(env, platform);
                debug!(module = name, %platform, supported, "gate evaluated");
                if supported {
                    Decision::Included
                } else {
                    Decision::Unsupported
                }
            };
            debug!(module = name, ?decision, "module decision");
            (descriptor, decision)
        })
        .collect()
}
