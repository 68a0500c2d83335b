use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::process::CMD_NOT_FOUND;

/// Failures that end the session before or outside the statement pipeline.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("0: Can't open {}", .path.display())]
    Script { path: PathBuf, source: io::Error },
}

impl ShellError {
    pub fn status(&self) -> i32 {
        match self {
            ShellError::Io(_) => 1,
            ShellError::Config(e) => e.status(),
            ShellError::Script { .. } => CMD_NOT_FOUND,
        }
    }
}
