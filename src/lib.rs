//! macos-notifier - macOS desktop notifications via terminal-notifier
//!
//! This crate translates a structured notification request into a
//! validated argument list for the external `terminal-notifier`
//! executable, and runs it.
//!
//! # Architecture
//!
//! - **Domain**: the [`Notification`] value object, the [`Sound`]
//!   enumeration, argument assembly, and errors
//! - **Infrastructure**: the one-time executable availability guard and
//!   child-process execution
//!
//! # Example
//!
//! ```no_run
//! use macos_notifier::{push, Notification, Sound};
//!
//! # async fn deliver() -> Result<(), macos_notifier::NotifyError> {
//! let request = Notification::new("Build finished")
//!     .title("CI")
//!     .sound(Sound::Glass)
//!     .link("https://ci.example.com/run/42");
//!
//! push(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{Notification, NotifyError, ParseSoundError, Sound};
pub use infrastructure::{ensure_available, push, Invocation};
