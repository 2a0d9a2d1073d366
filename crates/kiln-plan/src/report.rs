//! Human-readable and JSON renderings of a build plan.

use std::fmt;

use crate::plan::{BuildPlan, Decision};

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Included => "included",
            Decision::Unsupported => "unsupported",
            Decision::Disabled => "disabled",
        })
    }
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Build Plan ===")?;
        writeln!(f, "Platform: {}", self.platform)?;
        writeln!(
            f,
            "Modules: {} of {} included",
            self.included().count(),
            self.modules.len()
        )?;
        writeln!(f)?;

        writeln!(f, "--- Modules ---")?;
        for module in &self.modules {
            writeln!(f, "  {:<20} {}", module.name, module.decision)?;
        }

        if !self.config.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Configuration ---")?;
            for path in &self.config.include_paths {
                writeln!(f, "  include: {}", path.display())?;
            }
            for define in &self.config.defines {
                writeln!(f, "  define:  {define}")?;
            }
            for lib in &self.config.link_libs {
                writeln!(f, "  link:    {lib}")?;
            }
        }
        Ok(())
    }
}

impl BuildPlan {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
