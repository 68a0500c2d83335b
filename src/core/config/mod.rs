use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod loader;
mod paths;

pub use loader::ConfigLoader;
pub use paths::ConfigPaths;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),
    #[error("can't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl ConfigError {
    pub fn status(&self) -> i32 {
        match self {
            ConfigError::ConfigFileNotFound(_) => crate::process::CMD_NOT_FOUND,
            ConfigError::Read { .. } => 2,
        }
    }
}
