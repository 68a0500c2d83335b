use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use super::{status, ProcessError};

/// Runs one external program and blocks until it terminates.
///
/// The child inherits stdin, stdout, stderr and the full environment. `argv[0]`
/// is passed through as the child's own program name, so a command resolved
/// through `PATH` still sees the name it was invoked with.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, program: &Path, argv: &[String]) -> Result<i32, ProcessError> {
        let mut command = Command::new(program);
        if let Some((name, args)) = argv.split_first() {
            command.arg0(name).args(args);
        }
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(ProcessError::from_spawn)?;
        debug!("spawned {} as pid {}", program.display(), child.id());

        let exit = child.wait().map_err(ProcessError::Wait)?;
        let code = status::exit_code(exit);
        debug!("pid {} finished with status {}", child.id(), code);
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exit_status_passes_through() {
        let executor = ProcessExecutor::new();
        let code = executor
            .run(Path::new("/bin/sh"), &argv(&["sh", "-c", "exit 7"]))
            .unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_signal_termination() {
        let executor = ProcessExecutor::new();
        let code = executor
            .run(Path::new("/bin/sh"), &argv(&["sh", "-c", "kill -TERM $$"]))
            .unwrap();
        assert_eq!(code, 128 + libc::SIGTERM);
    }

    #[test]
    fn test_permission_denied() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script");
        fs::write(&script, "echo hi\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

        let executor = ProcessExecutor::new();
        let err = executor.run(&script, &argv(&["script"])).unwrap_err();
        assert!(matches!(err, ProcessError::PermissionDenied(_)));
        assert_eq!(err.status(), 126);
    }

    #[test]
    fn test_missing_program() {
        let executor = ProcessExecutor::new();
        let err = executor
            .run(Path::new("/definitely/not/here"), &argv(&["here"]))
            .unwrap_err();
        assert!(matches!(err, ProcessError::NotFound(_)));
    }
}
