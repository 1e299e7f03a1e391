//! Tortoise Rush (workspace facade crate).
//!
//! This package keeps a single `tortoise_rush::{core,term,types}` public
//! API while the implementation lives in dedicated crates under
//! `crates/`. The race loop driver and argument parsing sit here, next
//! to the binary that uses them.

pub use tortoise_rush_core as core;
pub use tortoise_rush_term as term;
pub use tortoise_rush_types as types;

pub mod cli;
pub mod runner;
