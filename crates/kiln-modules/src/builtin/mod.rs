//! Built-in engine module descriptors.

mod basis_universal;
mod cmark;
mod curl;
mod gltf;
mod gltf_blend;
mod keyframe_reduce;
mod openxr;
mod retargeter;

pub use basis_universal::BasisUniversal;
pub use cmark::Cmark;
pub use curl::Curl;
pub use gltf::Gltf;
pub use gltf_blend::GltfBlend;
pub use keyframe_reduce::KeyframeReduce;
pub use openxr::OpenXr;
pub use retargeter::Retargeter;

use kiln_env::OptionKey;

use crate::descriptor::OptionSpec;
use crate::error::Result;
use crate::registry::ModuleRegistry;

/// Whether the build includes editor tooling.
pub const TOOLS: OptionKey = OptionKey::new("tools");

/// Declaration of [`TOOLS`] shared by every module that reads it.
fn tools_option() -> OptionSpec {
    OptionSpec::new(TOOLS, "Build the editor and its importers", true)
}

/// Register every built-in module.
pub fn register_all(registry: &mut ModuleRegistry) -> Result<()> {
    registry.register(BasisUniversal)?;
    registry.register(Cmark)?;
    registry.register(Curl)?;
    registry.register(Gltf)?;
    registry.register(GltfBlend)?;
    registry.register(KeyframeReduce)?;
    registry.register(OpenXr)?;
    registry.register(Retargeter)?;
    Ok(())
}
