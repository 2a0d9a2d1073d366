//! `kiln modules` — registered module listing.

use anyhow::Result;
use kiln_modules::{ModuleDescriptor, ModuleRegistry};

/// List every registered module with its declared options and doc classes.
pub fn list() -> Result<()> {
    let registry = ModuleRegistry::builtin()?;
    println!("Registered modules ({}):", registry.len());
    println!();
    for module in registry.iter() {
        println!("{}", describe(module));
    }
    Ok(())
}

fn describe(module: &dyn ModuleDescriptor) -> String {
    let mut out = format!("  {}", module.name());
    for option in module.options() {
        let option_text = match &option.default {
            Some(default) => format!("{}={}", option.key, default),
            None => option.key.to_string(),
        };
        out.push_str(&format!("\n    option {option_text}  {}", option.help));
    }
    let classes = module.doc_classes();
    if !classes.is_empty() {
        out.push_str(&format!(
            "\n    docs   {}/: {}",
            module.doc_path(),
            classes.join(", ")
        ));
    }
    out
}
