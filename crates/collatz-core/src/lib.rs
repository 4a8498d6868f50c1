pub mod error;
pub mod validate;

pub mod adic;
pub mod dynamics;
pub mod profile;

pub use crate::dynamics::engine::generate;
pub use crate::dynamics::run::{AdicRun, SimpleRun, StopReason};
pub use crate::dynamics::tail::generate_simple;
pub use crate::profile::profile::{CollatzParams, RunConfig, RunProfile, SimpleConfig, TraceMode};
