// crates/collatz-core/src/dynamics/mod.rs

pub mod engine;
pub mod run;
pub mod state;
pub mod step;
pub mod tail;
