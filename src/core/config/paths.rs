use std::path::PathBuf;

/// Name of the startup file looked up in the home directory.
pub const RC_FILE: &str = ".shoalrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// Set when the path came from the command line; a missing file is then an error.
    pub required: bool,
}

impl ConfigPaths {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => Self {
                rc_path: Some(path),
                required: true,
            },
            None => Self {
                rc_path: dirs::home_dir().map(|home| home.join(RC_FILE)),
                required: false,
            },
        }
    }
}
