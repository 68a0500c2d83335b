use std::fs;

use log::{debug, info, warn};

use super::{ConfigError, ConfigPaths};
use crate::shell::{Flow, Shell};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Runs the startup file through the shell. Its lines do not count as
    /// invocations. An `exit` in the file is returned as `Flow::Exit`.
    pub fn load(&self, shell: &mut Shell) -> Result<Flow, ConfigError> {
        let status = Flow::Continue(shell.state.last_status);
        let Some(path) = &self.paths.rc_path else {
            return Ok(status);
        };

        if !path.exists() {
            if self.paths.required {
                return Err(ConfigError::ConfigFileNotFound(path.clone()));
            }
            debug!("no startup file at {}", path.display());
            return Ok(status);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if !self.paths.required => {
                warn!("skipping {}: {}", path.display(), e);
                return Ok(status);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };
        info!("loading {}", path.display());
        Ok(shell.execute_script(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_defines_aliases() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let rc = dir.path().join("rc");
        fs::write(&rc, "alias ll='ls -la'\n# comment\nalias g=git\n")?;

        let paths = ConfigPaths::new(Some(rc));
        let mut shell = Shell::new("shoal");
        let flow = ConfigLoader::new(&paths).load(&mut shell)?;

        assert_eq!(flow, Flow::Continue(0));
        assert_eq!(shell.state.aliases.resolve("ll").as_deref(), Some("ls -la"));
        assert_eq!(shell.state.aliases.resolve("g").as_deref(), Some("git"));
        assert_eq!(shell.state.invocations, 0);
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file() {
        let paths = ConfigPaths::new(Some(PathBuf::from("/nonexistent/shoalrc")));
        let mut shell = Shell::new("shoal");
        assert!(matches!(
            ConfigLoader::new(&paths).load(&mut shell),
            Err(ConfigError::ConfigFileNotFound(_))
        ));
    }

    #[test]
    fn test_missing_default_file_is_skipped() {
        let paths = ConfigPaths {
            rc_path: Some(PathBuf::from("/nonexistent/shoalrc")),
            required: false,
        };
        let mut shell = Shell::new("shoal");
        assert_eq!(
            ConfigLoader::new(&paths).load(&mut shell).ok(),
            Some(Flow::Continue(0))
        );
    }

    #[test]
    fn test_unreadable_explicit_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let paths = ConfigPaths::new(Some(dir.path().to_path_buf()));
        let mut shell = Shell::new("shoal");
        assert!(matches!(
            ConfigLoader::new(&paths).load(&mut shell),
            Err(ConfigError::Read { .. })
        ));

        let paths = ConfigPaths {
            rc_path: Some(dir.path().to_path_buf()),
            required: false,
        };
        assert_eq!(
            ConfigLoader::new(&paths).load(&mut shell).ok(),
            Some(Flow::Continue(0))
        );
        Ok(())
    }
}
