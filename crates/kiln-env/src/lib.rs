//! Build environment and platform model for the kiln module build.
//!
//! An [`Environment`] is created once per build invocation and shared by
//! every module descriptor:
//! - **Options:** typed values keyed by [`OptionKey`], read by capability gates
//! - **Build configuration:** include paths, defines and link libraries that
//!   configure hooks accumulate
//!
//! [`Platform`] is the closed set of platform tokens the orchestrator knows,
//! with an explicit [`Platform::Other`] arm for anything else.

pub mod config;
pub mod environment;
pub mod error;
pub mod option;
pub mod platform;

pub use config::{BuildConfig, Define};
pub use environment::Environment;
pub use error::{EnvError, Result};
pub use option::{OptionKey, OptionValue};
pub use platform::Platform;
