//! Platform identifiers.
//!
//! Platform tokens are parsed into a closed enumeration. Tokens the
//! orchestrator does not recognise are kept as [`Platform::Other`] so that a
//! module gate can exclude them through its default match arm instead of the
//! parse failing.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A target platform for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Android,
    Ios,
    /// Linux and the BSDs (X11/Wayland desktop).
    LinuxBsd,
    MacOs,
    /// Browser builds via WebAssembly.
    Web,
    Windows,
    /// A token outside the recognised set.
    Other(String),
}

impl Platform {
    /// Every recognised platform, in token order.
    pub const KNOWN: [Platform; 6] = [
        Platform::Android,
        Platform::Ios,
        Platform::LinuxBsd,
        Platform::MacOs,
        Platform::Web,
        Platform::Windows,
    ];

    /// Canonical token for this platform.
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::LinuxBsd => "linuxbsd",
            Platform::MacOs => "macos",
            Platform::Web => "web",
            Platform::Windows => "windows",
            Platform::Other(token) => token,
        }
    }

    /// Whether the token was one of the recognised platforms.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Platform::Other(_))
    }

    /// Desktop platforms that can host the editor.
    pub fn is_desktop(&self) -> bool {
        matches!(self, Platform::LinuxBsd | Platform::MacOs | Platform::Windows)
    }

    /// Short human-readable description used by listings.
    pub fn description(&self) -> &'static str {
        match self {
            Platform::Android => "Android (arm32, arm64, x86_64)",
            Platform::Ios => "iOS (arm64)",
            Platform::LinuxBsd => "Linux / *BSD desktop",
            Platform::MacOs => "macOS (x86_64, arm64)",
            Platform::Web => "Web (WebAssembly)",
            Platform::Windows => "Windows desktop",
            Platform::Other(_) => "unrecognised platform",
        }
    }
}

impl FromStr for Platform {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Ok(match token.as_str() {
            "android" => Platform::Android,
            "ios" | "iphone" => Platform::Ios,
            // Older build scripts spell the Linux desktop target by windowing system.
            "linuxbsd" | "linux" | "x11" => Platform::LinuxBsd,
            "macos" | "osx" => Platform::MacOs,
            "web" | "javascript" => Platform::Web,
            "windows" => Platform::Windows,
            _ => Platform::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for Platform {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(p) => p,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        Platform::from(s.to_string())
    }
}

impl From<Platform> for String {
    fn from(p: Platform) -> Self {
        p.as_str().to_string()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
