use std::env;
use std::io::Write;

use super::{Command, CommandError};
use crate::shell::{Flow, Shell};

fn validate_name(name: &str) -> Result<(), CommandError> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(CommandError::Execution(format!(
            "invalid variable name: {}",
            name
        )));
    }
    Ok(())
}

/// Prints the environment as `NAME=value` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(&self, shell: &mut Shell, _args: &[String]) -> Result<Flow, CommandError> {
        for (name, value) in env::vars_os() {
            writeln!(
                shell.streams.out,
                "{}={}",
                name.to_string_lossy(),
                value.to_string_lossy()
            )?;
        }
        Ok(Flow::Continue(0))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SetenvCommand;

impl Command for SetenvCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::Usage("usage: setenv VARIABLE VALUE"));
        };
        validate_name(name)?;
        if value.contains('\0') {
            return Err(CommandError::Execution("value contains a NUL byte".into()));
        }

        env::set_var(name, value);
        if name == "PATH" {
            shell.state.refresh_path();
        }
        Ok(Flow::Continue(0))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnsetenvCommand;

impl Command for UnsetenvCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError> {
        let [name] = args else {
            return Err(CommandError::Usage("usage: unsetenv VARIABLE"));
        };
        validate_name(name)?;

        env::remove_var(name);
        if name == "PATH" {
            shell.state.refresh_path();
        }
        Ok(Flow::Continue(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_setenv_and_unsetenv() -> Result<(), CommandError> {
        let mut shell = Shell::new("shoal");

        SetenvCommand.execute(&mut shell, &args(&["SHOAL_SETENV_TEST", "a b"]))?;
        assert_eq!(env::var("SHOAL_SETENV_TEST").unwrap(), "a b");

        UnsetenvCommand.execute(&mut shell, &args(&["SHOAL_SETENV_TEST"]))?;
        assert!(env::var("SHOAL_SETENV_TEST").is_err());
        Ok(())
    }

    #[test]
    fn test_setenv_arity() {
        let mut shell = Shell::new("shoal");
        assert!(matches!(
            SetenvCommand.execute(&mut shell, &args(&["ONLY_NAME"])),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            UnsetenvCommand.execute(&mut shell, &[]),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_invalid_names() {
        let mut shell = Shell::new("shoal");
        assert!(SetenvCommand
            .execute(&mut shell, &args(&["A=B", "x"]))
            .is_err());
        assert!(SetenvCommand.execute(&mut shell, &args(&["", "x"])).is_err());
    }
}
