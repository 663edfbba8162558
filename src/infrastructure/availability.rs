//! Availability guard for the terminal-notifier executable
//!
//! The platform check and PATH probe run at most once per process; every
//! caller afterwards observes the same cached outcome.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::domain::NotifyError;

/// Name of the external executable this crate drives
pub const BIN_NAME: &str = "terminal-notifier";

static EXECUTABLE: OnceLock<Result<PathBuf, NotifyError>> = OnceLock::new();

/// Confirm that terminal-notifier is usable and return its resolved path.
///
/// The underlying probe runs exactly once per process lifetime; concurrent
/// first callers block on that single probe, and every later call returns
/// the cached outcome without touching the system again.
///
/// # Errors
///
/// - [`NotifyError::PlatformUnsupported`] on anything other than macOS.
/// - [`NotifyError::ExecutableNotFound`] when the binary is not on PATH.
pub fn ensure_available() -> Result<&'static Path, NotifyError> {
    match EXECUTABLE.get_or_init(probe) {
        Ok(path) => Ok(path),
        Err(e) => Err(e.clone()),
    }
}

/// One-shot platform check and PATH probe
fn probe() -> Result<PathBuf, NotifyError> {
    if !cfg!(target_os = "macos") {
        return Err(NotifyError::PlatformUnsupported {
            os: env::consts::OS,
        });
    }

    let search_path = env::var_os("PATH").unwrap_or_default();
    find_in_path(BIN_NAME, &search_path).ok_or(NotifyError::ExecutableNotFound)
}

/// Search a PATH-style list of directories for an executable file
fn find_in_path(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_calls_return_the_same_outcome() {
        let first = ensure_available();
        let second = ensure_available();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_first_callers_observe_one_outcome() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(ensure_available)).collect();
        let mut results = handles.into_iter().map(|h| h.join().unwrap());

        let first = results.next().unwrap();
        assert!(results.all(|r| r == first));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn unsupported_platform_fails_without_probing() {
        let err = ensure_available().unwrap_err();
        assert_eq!(
            err,
            NotifyError::PlatformUnsupported {
                os: env::consts::OS
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn find_in_path_locates_an_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join(BIN_NAME);
        std::fs::write(&bin, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        let search_path = env::join_paths([dir.path()]).unwrap();
        assert_eq!(find_in_path(BIN_NAME, &search_path), Some(bin));
    }

    #[cfg(unix)]
    #[test]
    fn find_in_path_skips_non_executable_files() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join(BIN_NAME);
        std::fs::write(&bin, "").unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o644)).unwrap();

        let search_path = env::join_paths([dir.path()]).unwrap();
        assert_eq!(find_in_path(BIN_NAME, &search_path), None);
    }

    #[test]
    fn find_in_path_empty_search_path() {
        assert_eq!(find_in_path(BIN_NAME, OsStr::new("")), None);
    }
}
