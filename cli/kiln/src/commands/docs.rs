//! `kiln docs` — documentation class index.

use std::path::Path;

use anyhow::{bail, Result};
use kiln_docs::DocIndex;
use kiln_modules::ModuleRegistry;

use super::plan::{build_plan, Overrides};
use super::OutputFormat;
use crate::manifest::KilnManifest;

/// Collect the documentation index.
///
/// Without `platform` every registered module is indexed. With a platform, the
/// index is restricted to the modules that build plan includes.
pub fn collect(
    registry: &ModuleRegistry,
    manifest: Option<&KilnManifest>,
    platform: Option<&str>,
) -> Result<DocIndex> {
    let Some(platform) = platform else {
        return Ok(DocIndex::collect(registry)?);
    };
    let overrides = Overrides {
        platform: Some(platform),
        ..Default::default()
    };
    let plan = build_plan(registry, manifest, &overrides)?;
    Ok(DocIndex::collect_filtered(registry, |module| {
        plan.is_included(module)
    })?)
}

/// Print the index, optionally checking doc sources under `check_root`.
pub fn run(
    manifest: Option<&KilnManifest>,
    platform: Option<&str>,
    check_root: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let registry = ModuleRegistry::builtin()?;
    let index = collect(&registry, manifest, platform)?;

    match format {
        OutputFormat::Text => print!("{index}"),
        OutputFormat::Json => println!("{}", index.to_json()?),
    }

    if let Some(root) = check_root {
        let missing = index.check(root)?;
        for doc in &missing {
            eprintln!(
                "missing: {} ({}) expected at {}",
                doc.class,
                doc.module,
                doc.expected.display()
            );
        }
        if !missing.is_empty() {
            bail!("{} documentation source(s) missing", missing.len());
        }
    }
    Ok(())
}
