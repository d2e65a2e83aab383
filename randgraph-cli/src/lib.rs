//! Support library for the randgraph CLI binary.
//!
//! Exposes the command pipeline, logging set-up and the exploration session
//! so tests can drive them without spawning a process.

pub mod cli;
pub mod logging;
pub mod session;
