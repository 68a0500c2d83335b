use std::ffi::CStr;
use std::io;

use thiserror::Error;

pub mod executor;
pub mod status;

pub use executor::ProcessExecutor;

/// Status for commands that could not be found.
pub const CMD_NOT_FOUND: i32 = 127;
/// Status for commands that were found but could not be executed.
pub const CANNOT_EXECUTE: i32 = 126;
/// Status for generic failures inside the shell itself.
pub const GENERAL_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("fork: {}", describe(.0))]
    Fork(io::Error),
    #[error("{}", describe(.0))]
    PermissionDenied(io::Error),
    #[error("{}", describe(.0))]
    NotFound(io::Error),
    #[error("execve: {}", describe(.0))]
    Exec(io::Error),
    #[error("wait: {}", describe(.0))]
    Wait(io::Error),
}

impl ProcessError {
    /// Sorts a failed spawn into the stage that failed.
    pub fn from_spawn(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ProcessError::PermissionDenied(err),
            io::ErrorKind::NotFound => ProcessError::NotFound(err),
            _ => match err.raw_os_error() {
                Some(libc::EAGAIN) | Some(libc::ENOMEM) => ProcessError::Fork(err),
                _ => ProcessError::Exec(err),
            },
        }
    }

    pub fn status(&self) -> i32 {
        match self {
            ProcessError::Fork(_) | ProcessError::Wait(_) => GENERAL_FAILURE,
            ProcessError::PermissionDenied(_) | ProcessError::Exec(_) => CANNOT_EXECUTE,
            ProcessError::NotFound(_) => CMD_NOT_FOUND,
        }
    }
}

/// The bare `strerror` text for an OS error, without Rust's `(os error N)` suffix.
pub fn describe(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => unsafe {
            let text = libc::strerror(code);
            if text.is_null() {
                err.to_string()
            } else {
                CStr::from_ptr(text).to_string_lossy().into_owned()
            }
        },
        None => err.to_string(),
    }
}
