//! glTF 2.0 scene import and export.

use kiln_env::{Environment, Platform};

use crate::descriptor::ModuleDescriptor;

#[derive(Debug, Clone, Copy, Default)]
pub struct Gltf;

impl ModuleDescriptor for Gltf {
    fn name(&self) -> &'static str {
        "gltf"
    }

    fn can_build(&self, _env: &Environment, _platform: &Platform) -> bool {
        true
    }

    fn doc_classes(&self) -> &'static [&'static str] {
        &["GLTFDocumentExtension", "GLTFTextureSampler"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_everywhere() {
        let env = Environment::new();
        for platform in Platform::KNOWN {
            assert!(Gltf.can_build(&env, &platform));
        }
        assert!(Gltf.can_build(&env, &Platform::Other("haiku".into())));
    }

    #[test]
    fn doc_class_order_is_stable() {
        assert_eq!(
            Gltf.doc_classes(),
            &["GLTFDocumentExtension", "GLTFTextureSampler"]
        );
    }
}
