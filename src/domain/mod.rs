//! Domain layer - Notification requests and domain errors
//!
//! Contains the notification value objects and error types.
//! This layer touches no external systems beyond lexical path resolution.

pub mod error;
pub mod notification;

// Re-export common types
pub use error::{NotifyError, ParseSoundError};
pub use notification::{Notification, Sound};
