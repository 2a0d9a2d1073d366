//! OpenXR runtime integration.

use kiln_env::{Environment, OptionKey, Platform};

use crate::descriptor::{ModuleDescriptor, OptionSpec};

const OPENXR: OptionKey = OptionKey::new("openxr");

/// OpenXR loader and `OpenXRInterface`. Builds on Android, Linux/BSD and
/// Windows when the `openxr` option is on.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenXr;

impl ModuleDescriptor for OpenXr {
    fn name(&self) -> &'static str {
        "openxr"
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![OptionSpec::new(OPENXR, "Enable the OpenXR driver", true)]
    }

    fn can_build(&self, env: &Environment, platform: &Platform) -> bool {
        match platform {
            Platform::Android | Platform::LinuxBsd | Platform::Windows => env.flag(&OPENXR),
            _ => false,
        }
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        &["OpenXRInterface"]
    }
}

#[cfg(test)]
mod tests {
    use kiln_env::OptionValue;

    use super::*;

    fn env(enabled: bool) -> Environment {
        Environment::new().with(OPENXR, enabled)
    }

    #[test]
    fn supported_platforms_follow_option() {
        for platform in [Platform::Android, Platform::LinuxBsd, Platform::Windows] {
            assert!(OpenXr.can_build(&env(true), &platform), "{platform}");
            assert!(!OpenXr.can_build(&env(false), &platform), "{platform}");
        }
    }

    #[test]
    fn unsupported_platforms_always_excluded() {
        let others = [
            Platform::MacOs,
            Platform::Ios,
            Platform::Web,
            Platform::Other("haiku".into()),
        ];
        for platform in others {
            assert!(!OpenXr.can_build(&env(true), &platform), "{platform}");
            assert!(!OpenXr.can_build(&env(false), &platform), "{platform}");
        }
    }

    #[test]
    fn android_scenarios() {
        assert!(OpenXr.can_build(&env(true), &Platform::from("android")));
        assert!(!OpenXr.can_build(&env(false), &Platform::from("android")));
    }

    #[test]
    fn missing_option_means_disabled() {
        assert!(!OpenXr.can_build(&Environment::new(), &Platform::Windows));
    }

    #[test]
    fn gate_is_idempotent_and_pure() {
        let env = env(true);
        let before = env.clone();
        for _ in 0..3 {
            assert!(OpenXr.can_build(&env, &Platform::Windows));
        }
        assert_eq!(env, before);
    }

    #[test]
    fn windows_configure_leaves_environment_unchanged() {
        let mut env = env(true);
        assert!(OpenXr.can_build(&env, &Platform::Windows));
        let before = env.clone();
        OpenXr.configure(&mut env).unwrap();
        assert_eq!(env, before);
    }

    #[test]
    fn documentation_surface() {
        assert_eq!(OpenXr.doc_classes(), &["OpenXRInterface"]);
        assert_eq!(OpenXr.doc_classes(), OpenXr.doc_classes());
        assert_eq!(OpenXr.doc_path(), "doc_classes");
    }

    #[test]
    fn declares_openxr_option_enabled_by_default() {
        let opts = OpenXr.options();
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].key, OPENXR);
        assert_eq!(opts[0].default, Some(OptionValue::Bool(true)));
    }
}
