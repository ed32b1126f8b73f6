//! sceneops core - plan execution
//!
//! Turns a generated text plan into a bounded sequence of whitelisted scene
//! mutations:
//! 1. **Parse**: [`parse_plan`] extracts the `{"plan": [...]}` object
//! 2. **Run**: [`PlanRunner`] dispatches each step through the
//!    [`CapabilityRegistry`], converting arguments and checking selection
//!    preconditions, and logs one entry per step
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sceneops_core::prelude::*;
//!
//! let registry = CapabilityRegistry::with_defaults();
//! let report = execute_plan_text(completion, &registry, &mut host)?;
//!
//! println!("{}", report.render());
//! ```

pub mod args;
pub mod context;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod parser;
pub mod plan;
pub mod registry;
pub mod runner;
pub mod state_machine;

// Re-exports
pub use args::{Arg, Axis, Euler, TypedArgs, Vec3};
pub use dispatch::Dispatcher;
pub use error::{DispatchError, ParseError};
pub use host::{HostContext, HostError, ObjectSummary};
pub use parser::parse_plan;
pub use plan::{Plan, Step};
pub use registry::{Capability, CapabilityDescriptor, CapabilityInfo, CapabilityRegistry};
pub use runner::{execute_plan_text, ExecutionLogEntry, Outcome, PlanRunner, RunReport};

/// Common imports
pub mod prelude {
    pub use crate::args::{Arg, Axis, TypedArgs, Vec3};
    pub use crate::error::{DispatchError, ParseError};
    pub use crate::host::{HostContext, HostError};
    pub use crate::parser::parse_plan;
    pub use crate::registry::CapabilityRegistry;
    pub use crate::runner::{execute_plan_text, PlanRunner, RunReport};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
