//! Stdio tool-server connection descriptors and the optional startup probe.
//!
//! Only stdio transports are supported; the agents here launch their tool
//! servers as local subprocesses speaking the tool protocol over stdio.

pub mod probe;
pub mod types;

pub use types::*;
