//! `kiln init` — project manifest scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::manifest::{KilnManifest, MANIFEST_FILE};

/// Write a `kiln.toml` for project `name` into `project_dir`.
pub fn run(project_dir: &Path, name: &str) -> Result<()> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        bail!("{} already exists", manifest_path.display());
    }

    fs::create_dir_all(project_dir)
        .with_context(|| format!("creating {}", project_dir.display()))?;
    fs::write(&manifest_path, KilnManifest::template(name))
        .with_context(|| format!("writing {}", manifest_path.display()))?;

    println!("Created {}", manifest_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("engine");

        run(&project, "engine").unwrap();

        let content = fs::read_to_string(project.join(MANIFEST_FILE)).unwrap();
        let manifest = KilnManifest::parse(&content).unwrap();
        assert_eq!(manifest.project.name, "engine");
    }

    #[test]
    fn init_refuses_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), "first").unwrap();

        let err = run(dir.path(), "second").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
