//! Animation retargeting node.

use kiln_env::{Environment, Platform};

use crate::descriptor::ModuleDescriptor;

#[derive(Debug, Clone, Copy, Default)]
pub struct Retargeter;

impl ModuleDescriptor for Retargeter {
    fn name(&self) -> &'static str {
        "retargeter"
    }

    fn can_build(&self, _env: &Environment, _platform: &Platform) -> bool {
        true
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        &["AnimationNodeRetarget"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_everywhere() {
        let env = Environment::new();
        for platform in Platform::KNOWN {
            assert!(Retargeter.can_build(&env, &platform));
        }
        assert!(Retargeter.can_build(&env, &Platform::Other("haiku".into())));
    }

    #[test]
    fn documents_retarget_node() {
        assert_eq!(Retargeter.doc_classes(), &["AnimationNodeRetarget"]);
        assert_eq!(Retargeter.doc_path(), "doc_classes");
    }
}
