//! Infrastructure layer - Executable lookup and process execution
//!
//! Integrates with the system: probing PATH for terminal-notifier and
//! spawning it as a child process.

pub mod availability;
pub mod invocation;

// Re-export the operational surface
pub use availability::{ensure_available, BIN_NAME};
pub use invocation::{push, Invocation};
