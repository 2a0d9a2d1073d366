//! Documentation class index for the documentation generation pass.
//!
//! The index is collected from every registered module, whether or not the
//! module is part of the current build, and keeps each module's declared
//! class order.

pub mod error;
pub mod index;

pub use error::{DocsError, Result};
pub use index::{DocEntry, DocIndex, MissingDoc};
