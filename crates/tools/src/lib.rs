//! Shared plumbing for the board generator binaries.

pub mod cli;
pub mod logging;
pub mod print;
pub mod seed;
