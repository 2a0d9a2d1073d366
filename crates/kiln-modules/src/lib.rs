//! Module descriptors and the explicit module registry.
//!
//! Every optional engine module is described by a [`ModuleDescriptor`]:
//! - **Capability gate:** may this module build for a platform and options?
//! - **Configure hook:** augment the shared environment once included
//! - **Documentation surface:** doc class names and their source directory
//!
//! Descriptors are registered by name in a [`ModuleRegistry`]; the
//! orchestrator never discovers them by scanning directories.

pub mod builtin;
pub mod descriptor;
pub mod error;
pub mod registry;

pub use descriptor::{ModuleDescriptor, OptionSpec, DEFAULT_DOC_PATH};
pub use error::{ConfigureError, ModuleError, Result};
pub use registry::ModuleRegistry;
