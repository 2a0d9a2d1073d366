//! Orchestrator errors.

use kiln_modules::ConfigureError;
use thiserror::Error;

/// Errors that abort a build plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("configuring module '{module}' failed")]
    Configure {
        module: String,
        #[source]
        source: ConfigureError,
    },
}

/// Result type alias for planning.
pub type Result<T> = std::result::Result<T, PlanError>;
