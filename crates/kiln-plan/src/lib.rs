//! Build orchestrator for kiln modules.
//!
//! Planning runs in three steps over a [`kiln_modules::ModuleRegistry`]:
//! 1. Seed the option defaults every module declares.
//! 2. Gate every module against a shared borrow of the environment.
//! 3. Configure the included modules, in registry order.
//!
//! A configure failure aborts the plan; nothing is rolled back.

pub mod error;
pub mod plan;
pub mod report;

pub use error::{PlanError, Result};
pub use plan::{plan, BuildPlan, Decision, ModulePlan, MODULES_ENABLED_BY_DEFAULT};
