//! Bezier keyframe reduction for imported animation tracks.

use kiln_env::{Environment, Platform};

use crate::descriptor::ModuleDescriptor;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframeReduce;

impl ModuleDescriptor for KeyframeReduce {
    fn name(&self) -> &'static str {
        "keyframe_reduce"
    }

    fn can_build(&self, _env: &Environment, _platform: &Platform) -> bool {
        true
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        &["BezierKeyframeReduce"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_everywhere() {
        let env = Environment::new();
        for platform in Platform::KNOWN {
            assert!(KeyframeReduce.can_build(&env, &platform));
        }
        assert!(KeyframeReduce.can_build(&env, &Platform::Other("haiku".into())));
    }

    #[test]
    fn documents_reducer() {
        assert_eq!(KeyframeReduce.doc_classes(), &["BezierKeyframeReduce"]);
        assert_eq!(KeyframeReduce.doc_path(), "doc_classes");
    }
}
