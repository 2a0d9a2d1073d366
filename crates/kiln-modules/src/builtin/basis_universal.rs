//! Basis Universal texture transcoder, plus the encoder in editor builds.

use kiln_env::{Environment, Platform};

use super::{tools_option, TOOLS};
use crate::descriptor::{ModuleDescriptor, OptionSpec};
use crate::error::ConfigureError;

#[derive(Debug, Clone, Copy, Default)]
pub struct BasisUniversal;

impl ModuleDescriptor for BasisUniversal {
    fn name(&self) -> &'static str {
        "basis_universal"
    }

    fn options(&self) -> Vec<OptionSpec> {
        vec![tools_option()]
    }

    fn can_build(&self, _env: &Environment, platform: &Platform) -> bool {
        !matches!(platform, Platform::Web)
    }

    fn configure(&self, env: &mut Environment) -> Result<(), ConfigureError> {
        let tools = env.flag(&TOOLS);
        let config = env.config_mut();
        config.add_include_path("thirdparty/basis_universal");
        if tools {
            config.define("BASISU_ENCODER", None)?;
        }
        Ok(())
    }
}
