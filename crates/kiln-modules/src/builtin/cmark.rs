//! CommonMark rendering for rich text labels.

use kiln_env::{Environment, Platform};

use crate::descriptor::ModuleDescriptor;
use crate::error::ConfigureError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Cmark;

impl ModuleDescriptor for Cmark {
    fn name(&self) -> &'static str {
        "cmark"
    }

    fn can_build(&self, _env: &Environment, _platform: &Platform) -> bool {
        true
    }

    fn configure(&self, env: &mut Environment) -> Result<(), ConfigureError> {
        let config = env.config_mut();
        config.add_include_path("thirdparty/cmark/src");
        config.define("CMARK_STATIC_DEFINE", None)?;
        Ok(())
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        &["RichTextLabelCommonmark"]
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn configure_registers_static_library() {
        let mut env = Environment::new();
        Cmark.configure(&mut env).unwrap();
        assert_eq!(
            env.config().include_paths,
            vec![PathBuf::from("thirdparty/cmark/src")]
        );
        assert!(env.config().define_value("CMARK_STATIC_DEFINE").is_some());
    }

    #[test]
    fn configure_is_idempotent() {
        let mut env = Environment::new();
        Cmark.configure(&mut env).unwrap();
        let once = env.clone();
        Cmark.configure(&mut env).unwrap();
        assert_eq!(env, once);
    }
}
