//! HTTP client backed by libcurl.

use kiln_env::{Environment, OptionKey, Platform};

use crate::descriptor::{ModuleDescriptor, OptionSpec};
use crate::error::ConfigureError;

const BUILTIN_CURL: OptionKey = OptionKey::new("builtin_curl");
const CURL_PREFIX: OptionKey = OptionKey::new("curl_prefix");

/// libcurl HTTP client. Uses the bundled copy unless `builtin_curl` is off,
/// in which case the system library is linked, optionally from `curl_prefix`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Curl;

impl ModuleDescriptor for Curl {
    fn name(&self) -> &'static str {
        "curl"
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![
            OptionSpec::new(
                BUILTIN_CURL,
                "Use the bundled libcurl instead of the system library",
                true,
            ),
            OptionSpec::unset(CURL_PREFIX, "Install prefix of the system libcurl"),
        ]
    }

    fn can_build(&self, _env: &Environment, platform: &Platform) -> bool {
        matches!(
            platform,
            Platform::LinuxBsd | Platform::MacOs | Platform::Windows | Platform::Android
        )
    }

    fn configure(&self, env: &mut Environment) -> Result<(), ConfigureError> {
        if env.flag(&BUILTIN_CURL) {
            let config = env.config_mut();
            config.add_include_path("thirdparty/curl/include");
            config.define("CURL_STATICLIB", None)?;
            return Ok(());
        }

        let include = env.path(&CURL_PREFIX)?.map(|prefix| prefix.join("include"));
        let config = env.config_mut();
        if let Some(include) = include {
            config.add_include_path(include);
        }
        config.add_link_lib("curl");
        Ok(())
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        &["HTTPClientCurl"]
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kiln_env::OptionValue;

    use super::*;

    #[test]
    fn declares_every_option_it_reads() {
        let opts = Curl.options();
        let keys: Vec<_> = opts.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["builtin_curl", "curl_prefix"]);
        assert_eq!(opts[0].default, Some(OptionValue::Bool(true)));
        assert_eq!(opts[1].default, None);
    }

    #[test]
    fn desktop_and_android_only() {
        let env = Environment::new();
        assert!(Curl.can_build(&env, &Platform::Android));
        assert!(Curl.can_build(&env, &Platform::MacOs));
        assert!(!Curl.can_build(&env, &Platform::Web));
        assert!(!Curl.can_build(&env, &Platform::Ios));
    }

    #[test]
    fn bundled_library() {
        let mut env = Environment::new().with(BUILTIN_CURL, true);
        Curl.configure(&mut env).unwrap();
        assert!(env.config().define_value("CURL_STATICLIB").is_some());
        assert!(env.config().link_libs.is_empty());
    }

    #[test]
    fn system_library_with_prefix() {
        let mut env = Environment::new()
            .with(BUILTIN_CURL, false)
            .with(CURL_PREFIX, PathBuf::from("/opt/curl"));
        Curl.configure(&mut env).unwrap();
        assert_eq!(env.config().link_libs, vec!["curl".to_string()]);
        assert_eq!(
            env.config().include_paths,
            vec![PathBuf::from("/opt/curl/include")]
        );
        assert!(env.config().define_value("CURL_STATICLIB").is_none());
    }

    #[test]
    fn system_library_without_prefix() {
        let mut env = Environment::new().with(BUILTIN_CURL, false);
        Curl.configure(&mut env).unwrap();
        assert_eq!(env.config().link_libs, vec!["curl".to_string()]);
        assert!(env.config().include_paths.is_empty());
    }

    #[test]
    fn malformed_prefix_fails_configure() {
        let mut env = Environment::new()
            .with(BUILTIN_CURL, false)
            .with(CURL_PREFIX, true);
        let err = Curl.configure(&mut env).unwrap_err();
        assert!(matches!(err, ConfigureError::Env(_)));
    }
}
