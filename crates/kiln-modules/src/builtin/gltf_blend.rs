//! Blender scene import through the glTF pipeline. Editor only.

use kiln_env::{Environment, Platform};

use super::{tools_option, TOOLS};
use crate::descriptor::{ModuleDescriptor, OptionSpec};

#[derive(Debug, Clone, Copy, Default)]
pub struct GltfBlend;

impl ModuleDescriptor for GltfBlend {
    fn name(&self) -> &'static str {
        "gltf_blend"
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![tools_option()]
    }

    fn can_build(&self, env: &Environment, platform: &Platform) -> bool {
        platform.is_desktop() && env.flag(&TOOLS)
    }
}
