use std::env;
use std::io::Write;
use std::path::PathBuf;

use super::{Command, CommandError};
use crate::path::PathExpander;
use crate::shell::{Flow, Shell};

#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl CdCommand {
    fn target(&self, arg: Option<&str>) -> Option<PathBuf> {
        match arg {
            None => env::var_os("HOME")
                .filter(|home| !home.is_empty())
                .map(PathBuf::from)
                .or_else(|| PathExpander::new().home_dir()),
            Some("-") => env::var_os("OLDPWD")
                .map(PathBuf::from)
                .or_else(|| env::current_dir().ok()),
            Some(dir) => Some(PathBuf::from(dir)),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError> {
        let arg = args.first().map(String::as_str);
        let Some(target) = self.target(arg) else {
            return Ok(Flow::Continue(0));
        };

        let previous = env::current_dir().ok();
        env::set_current_dir(&target)
            .map_err(|_| CommandError::CantCd(target.display().to_string()))?;

        let current = env::current_dir()?;
        if let Some(previous) = previous {
            env::set_var("OLDPWD", previous);
        }
        env::set_var("PWD", &current);

        if arg == Some("-") {
            writeln!(shell.streams.out, "{}", current.display())?;
        }
        Ok(Flow::Continue(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_invalid() {
        let mut shell = Shell::new("shoal");
        let result = CdCommand.execute(&mut shell, &["/nonexistent/path".to_string()]);
        assert!(matches!(result, Err(CommandError::CantCd(ref dir)) if dir == "/nonexistent/path"));
    }

    #[test]
    fn test_cd_target_resolution() {
        let cmd = CdCommand;
        assert_eq!(cmd.target(Some("/tmp")), Some(PathBuf::from("/tmp")));
        assert!(cmd.target(None).is_some());
    }
}
