use std::env;
use std::ffi::{CString, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::trace;

/// Directories taken from `PATH`, searched in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    dirs: Vec<PathBuf>,
}

impl PathList {
    /// `None` when `PATH` is unset or empty; commands must then be named by path.
    pub fn from_env() -> Option<Self> {
        env::var_os("PATH")
            .filter(|value| !value.is_empty())
            .map(|value| Self::parse(&value))
    }

    /// Empty entries stand for the current directory.
    pub fn parse(value: &OsStr) -> Self {
        let dirs = env::split_paths(value)
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    dir
                }
            })
            .collect();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.dirs.iter().map(|dir| dir.join(name)).find(|candidate| {
            trace!("checking {}", candidate.display());
            candidate.is_file() && is_executable(candidate)
        })
    }
}

fn access(path: &Path, mode: libc::c_int) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

pub fn exists(path: &Path) -> bool {
    access(path, libc::F_OK)
}

pub fn is_executable(path: &Path) -> bool {
    access(path, libc::X_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_parse_keeps_order_and_empty_entries() {
        let list = PathList::parse(OsStr::new("/usr/bin::/bin"));
        assert_eq!(
            list.dirs(),
            [
                PathBuf::from("/usr/bin"),
                PathBuf::from("."),
                PathBuf::from("/bin")
            ]
        );
    }

    #[test]
    fn test_find_executable_skips_non_executable() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let plain = first.path().join("tool");
        fs::write(&plain, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();

        let runnable = second.path().join("tool");
        fs::write(&runnable, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&runnable, fs::Permissions::from_mode(0o755)).unwrap();

        let value = env::join_paths([first.path(), second.path()]).unwrap();
        let list = PathList::parse(&value);

        assert_eq!(list.find_executable("tool"), Some(runnable));
        assert_eq!(list.find_executable("missing"), None);
    }

    #[test]
    fn test_find_executable_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let list = PathList::parse(dir.path().as_os_str());
        assert_eq!(list.find_executable("sub"), None);
    }

    #[test]
    fn test_access_checks() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data");
        fs::write(&file, "x").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(exists(&file));
        assert!(!is_executable(&file));
        assert!(!exists(&dir.path().join("nothing")));
    }
}
