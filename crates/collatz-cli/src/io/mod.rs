// crates/collatz-cli/src/io/mod.rs

pub mod jsonl;
pub mod profile_file;
