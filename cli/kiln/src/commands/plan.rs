//! `kiln plan` — gate and configure modules for one platform.

use anyhow::{bail, Context, Result};
use kiln_env::option::parse_assignment;
use kiln_env::{Environment, OptionKey, Platform};
use kiln_modules::ModuleRegistry;
use kiln_plan::BuildPlan;

use super::OutputFormat;
use crate::manifest::{host_platform, KilnManifest};

/// Command-line overrides layered on top of the manifest.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    /// Platform token; wins over the manifest's `[build] platform`.
    pub platform: Option<&'a str>,
    /// `KEY=VALUE` option assignments.
    pub sets: &'a [String],
    /// Modules to switch off.
    pub disabled: &'a [String],
}

/// Resolve the platform and environment for a plan.
pub fn resolve(
    registry: &ModuleRegistry,
    manifest: Option<&KilnManifest>,
    overrides: &Overrides<'_>,
) -> Result<(Platform, Environment)> {
    let platform = overrides
        .platform
        .map(Platform::from)
        .or_else(|| manifest.and_then(KilnManifest::default_platform))
        .unwrap_or_else(host_platform);

    let mut env = manifest.map(KilnManifest::environment).unwrap_or_default();
    for assignment in overrides.sets {
        let (key, value) = parse_assignment(assignment)
            .with_context(|| format!("parsing --set {assignment}"))?;
        env.set(key, value);
    }
    for module in overrides.disabled {
        if !registry.contains(module) {
            bail!("unknown module '{module}'. Use 'kiln modules' to see registered modules.");
        }
        env.set(OptionKey::module_enabled(module), false);
    }
    Ok((platform, env))
}

/// Resolve inputs and run the orchestrator.
pub fn build_plan(
    registry: &ModuleRegistry,
    manifest: Option<&KilnManifest>,
    overrides: &Overrides<'_>,
) -> Result<BuildPlan> {
    let (platform, mut env) = resolve(registry, manifest, overrides)?;
    let plan = kiln_plan::plan(registry, &mut env, &platform)
        .with_context(|| format!("planning build for {platform}"))?;
    Ok(plan)
}

/// Print the build plan.
pub fn run(
    manifest: Option<&KilnManifest>,
    overrides: &Overrides<'_>,
    format: OutputFormat,
) -> Result<()> {
    let registry = ModuleRegistry::builtin()?;
    let plan = build_plan(&registry, manifest, overrides)?;
    match format {
        OutputFormat::Text => print!("{plan}"),
        OutputFormat::Json => println!("{}", plan.to_json()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use kiln_plan::Decision;

    use super::*;

    fn registry() -> ModuleRegistry {
        ModuleRegistry::builtin().unwrap()
    }

    #[test]
    fn command_line_platform_wins() {
        let manifest =
            KilnManifest::parse("[project]\nname = \"p\"\n[build]\nplatform = \"web\"\n").unwrap();
        let overrides = Overrides {
            platform: Some("android"),
            ..Default::default()
        };
        let (platform, _) = resolve(&registry(), Some(&manifest), &overrides).unwrap();
        assert_eq!(platform, Platform::Android);

        let (platform, _) = resolve(&registry(), Some(&manifest), &Overrides::default()).unwrap();
        assert_eq!(platform, Platform::Web);
    }

    #[test]
    fn falls_back_to_host_platform() {
        let (platform, env) = resolve(&registry(), None, &Overrides::default()).unwrap();
        assert_eq!(platform, host_platform());
        assert_eq!(env, Environment::new());
    }

    #[test]
    fn set_overrides_manifest_option() {
        let manifest =
            KilnManifest::parse("[project]\nname = \"p\"\n[options]\nopenxr = true\n").unwrap();
        let sets = vec!["openxr=no".to_string()];
        let overrides = Overrides {
            platform: Some("android"),
            sets: &sets,
            ..Default::default()
        };
        let plan = build_plan(&registry(), Some(&manifest), &overrides).unwrap();
        assert_eq!(plan.decision("openxr"), Some(Decision::Unsupported));
    }

    #[test]
    fn disable_module_flag() {
        let disabled = vec!["gltf".to_string()];
        let overrides = Overrides {
            platform: Some("windows"),
            disabled: &disabled,
            ..Default::default()
        };
        let plan = build_plan(&registry(), None, &overrides).unwrap();
        assert_eq!(plan.decision("gltf"), Some(Decision::Disabled));
        assert!(plan.is_included("openxr"));
    }

    #[test]
    fn disable_unknown_module_fails() {
        let disabled = vec!["nonexistent".to_string()];
        let overrides = Overrides {
            disabled: &disabled,
            ..Default::default()
        };
        let err = resolve(&registry(), None, &overrides).unwrap_err();
        assert!(err.to_string().contains("unknown module"));
    }

    #[test]
    fn malformed_set_fails() {
        let sets = vec!["openxr".to_string()];
        let overrides = Overrides {
            sets: &sets,
            ..Default::default()
        };
        assert!(resolve(&registry(), None, &overrides).is_err());
    }

    #[test]
    fn configure_failure_surfaces_module_name() {
        let sets = vec!["builtin_curl=no".to_string(), "curl_prefix=yes".to_string()];
        let overrides = Overrides {
            platform: Some("linuxbsd"),
            sets: &sets,
            ..Default::default()
        };
        let err = build_plan(&registry(), None, &overrides).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("planning build for linuxbsd"), "{message}");
        assert!(message.contains("'curl'"), "{message}");
    }

    #[test]
    fn run_prints_both_formats() {
        let overrides = Overrides {
            platform: Some("android"),
            ..Default::default()
        };
        run(None, &overrides, OutputFormat::Text).unwrap();
        run(None, &overrides, OutputFormat::Json).unwrap();
    }
}
