//! Domain error types

use std::time::Duration;

use thiserror::Error;

/// Error when parsing a sound name string
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid sound: \"{input}\". Valid sounds are: default, Basso, Blow, Bottle, Frog, Funk, Glass, Hero, Morse, Ping, Pop, Purr, Sosumi, Submarine, Tink")]
pub struct ParseSoundError {
    pub input: String,
}

/// Error when building or delivering a notification
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    #[error("{os} does not support terminal-notifier")]
    PlatformUnsupported { os: &'static str },

    #[error("could not find the terminal-notifier executable on PATH (try `brew install terminal-notifier`)")]
    ExecutableNotFound,

    #[error("please specify a proper message argument")]
    MissingMessage,

    #[error("could not resolve image path \"{path}\": {reason}")]
    PathNormalization { path: String, reason: String },

    #[error("nothing to send: no notification arguments were produced")]
    NothingToSend,

    #[error("failed to deliver notification: {0}")]
    ExecutionFailed(String),

    #[error("notification delivery cancelled after {after:?}")]
    Cancelled { after: Duration },
}
