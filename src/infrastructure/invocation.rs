//! Building and running terminal-notifier invocations

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::domain::{Notification, NotifyError};

use super::availability::ensure_available;

/// A ready-to-run terminal-notifier invocation: the resolved executable
/// path, the flattened flag/value argument list, and an optional delivery
/// timeout.
#[derive(Debug, Clone)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Invocation {
    /// Build an invocation for the given request.
    ///
    /// The availability guard runs first; its failure propagates
    /// unchanged, before any field validation. Field validation and
    /// argument assembly follow via [`Notification::to_args`].
    pub fn build(
        request: &Notification,
        timeout: Option<Duration>,
    ) -> Result<Self, NotifyError> {
        let program = ensure_available()?;
        let args = request.to_args()?;

        Ok(Self {
            program: program.to_path_buf(),
            args,
            timeout,
        })
    }

    /// Resolved path of the terminal-notifier executable
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Flag/value argument pairs, flattened in delivery order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Delivery timeout, if one was requested
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Create a spawnable command for this invocation.
    ///
    /// Stdio is nulled and the child is killed if the spawned handle is
    /// dropped before it exits.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }

    /// Run the invocation and wait for it to finish.
    ///
    /// If a timeout was set and expires before the child exits, the child
    /// is killed and [`NotifyError::Cancelled`] is returned. Launch
    /// failures and non-zero exit statuses surface as
    /// [`NotifyError::ExecutionFailed`].
    pub async fn run(&self) -> Result<(), NotifyError> {
        let mut child = self
            .command()
            .spawn()
            .map_err(|e| NotifyError::ExecutionFailed(e.to_string()))?;

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => {
                    waited.map_err(|e| NotifyError::ExecutionFailed(e.to_string()))?
                }
                Err(_) => {
                    let _ = child.kill().await;
                    return Err(NotifyError::Cancelled { after: limit });
                }
            },
            None => child
                .wait()
                .await
                .map_err(|e| NotifyError::ExecutionFailed(e.to_string()))?,
        };

        if !status.success() {
            return Err(NotifyError::ExecutionFailed(format!(
                "terminal-notifier exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

/// Build and deliver a notification in one call.
///
/// Equivalent to [`Invocation::build`] with no timeout followed by
/// [`Invocation::run`]; build and execution failures propagate unchanged.
pub async fn push(request: &Notification) -> Result<(), NotifyError> {
    Invocation::build(request, None)?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn build_fails_with_platform_unsupported() {
        let err = Invocation::build(&Notification::new("Hi"), None).unwrap_err();
        assert!(matches!(err, NotifyError::PlatformUnsupported { .. }));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn guard_failure_precedes_field_validation() {
        // An empty message would be MissingMessage, but the guard runs first.
        let err = Invocation::build(&Notification::new(""), None).unwrap_err();
        assert!(matches!(err, NotifyError::PlatformUnsupported { .. }));
    }

    #[cfg(not(target_os = "macos"))]
    #[tokio::test]
    async fn push_fails_with_platform_unsupported() {
        let err = push(&Notification::new("Hi")).await.unwrap_err();
        assert!(matches!(err, NotifyError::PlatformUnsupported { .. }));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn build_binds_program_and_args() {
        // Needs terminal-notifier installed; skip quietly when it is not.
        let built = Invocation::build(&Notification::new("Hi").title("T"), None);
        let Ok(invocation) = built else {
            return;
        };
        assert!(invocation.program().is_absolute());
        assert_eq!(invocation.args(), ["-message", "Hi", "-title", "T"]);
        assert_eq!(invocation.timeout(), None);
    }
}
