//! `kiln platforms` — recognised platform tokens.

use anyhow::Result;
use kiln_env::Platform;

use crate::manifest::host_platform;

/// List every recognised platform token.
pub fn list() -> Result<()> {
    let host = host_platform();
    println!("Recognised platforms:");
    println!();
    for platform in Platform::KNOWN {
        let marker = if platform == host { " (host)" } else { "" };
        println!("  {:<12} {}{marker}", platform.as_str(), platform.description());
    }
    println!();
    println!("Other tokens are accepted and excluded by every platform-gated module.");
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn list_runs() {
        super::list().unwrap();
    }
}
