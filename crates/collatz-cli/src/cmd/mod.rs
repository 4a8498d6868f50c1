// crates/collatz-cli/src/cmd/mod.rs

pub mod args;
pub mod profile;
pub mod run;
pub mod scan;
pub mod simple;
