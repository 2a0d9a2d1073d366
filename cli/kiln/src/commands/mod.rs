//! CLI command implementations.

pub mod docs;
pub mod init;
pub mod modules;
pub mod plan;
pub mod platforms;

use clap::ValueEnum;

/// Report output format shared by `plan` and `docs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
