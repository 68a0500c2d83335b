use std::collections::BTreeMap;
use std::io;

use thiserror::Error;

mod alias;
mod cd;
mod env;
mod exit;
mod source;

pub use alias::AliasCommand;
pub use cd::CdCommand;
pub use env::{EnvCommand, SetenvCommand, UnsetenvCommand};
pub use exit::ExitCommand;
pub use source::SourceCommand;

use crate::core::aliases::AliasError;
use crate::shell::{Flow, Shell};

/// Status for builtin misuse (bad arguments, unusable operands).
pub const MISUSE: i32 = 2;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
    #[error("Illegal number: {0}")]
    IllegalNumber(String),
    #[error("can't cd to {0}")]
    CantCd(String),
    #[error("cannot open {0}")]
    CantOpen(String),
    #[error("{0}")]
    Execution(String),
    #[error("{0}")]
    Alias(#[from] AliasError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    pub fn status(&self) -> i32 {
        match self {
            CommandError::Usage(_)
            | CommandError::IllegalNumber(_)
            | CommandError::CantCd(_)
            | CommandError::CantOpen(_) => MISUSE,
            CommandError::Alias(e) => e.status(),
            CommandError::Execution(_) | CommandError::Io(_) => 1,
        }
    }
}

/// A command implemented inside the shell. `args` excludes the command name.
pub trait Command {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError>;
}

#[derive(Debug, Clone, Copy)]
pub enum CommandType {
    Cd(CdCommand),
    Env(EnvCommand),
    Exit(ExitCommand),
    Setenv(SetenvCommand),
    Source(SourceCommand),
    Unsetenv(UnsetenvCommand),
}

impl Command for CommandType {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(shell, args),
            CommandType::Env(cmd) => cmd.execute(shell, args),
            CommandType::Exit(cmd) => cmd.execute(shell, args),
            CommandType::Setenv(cmd) => cmd.execute(shell, args),
            CommandType::Source(cmd) => cmd.execute(shell, args),
            CommandType::Unsetenv(cmd) => cmd.execute(shell, args),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinTable {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinTable {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand));
        commands.insert("env", CommandType::Env(EnvCommand));
        commands.insert("exit", CommandType::Exit(ExitCommand));
        commands.insert("setenv", CommandType::Setenv(SetenvCommand));
        commands.insert("source", CommandType::Source(SourceCommand));
        commands.insert("unsetenv", CommandType::Unsetenv(UnsetenvCommand));
        Self { commands }
    }

    /// `None` means the name is not a builtin and dispatch falls through to
    /// external execution.
    pub fn lookup(&self, name: &str) -> Option<CommandType> {
        self.commands.get(name).copied()
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_command_detection() {
        let table = BuiltinTable::new();

        for name in ["cd", "env", "exit", "setenv", "source", "unsetenv"] {
            assert!(table.is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!table.is_builtin("alias"));
        assert!(!table.is_builtin("ls"));
        assert!(!table.is_builtin(""));
        assert!(table.lookup("ls").is_none());
    }

    #[test]
    fn test_command_error_status() {
        assert_eq!(CommandError::Usage("usage").status(), 2);
        assert_eq!(CommandError::IllegalNumber("x".into()).status(), 2);
        assert_eq!(CommandError::CantCd("/nope".into()).status(), 2);
        assert_eq!(CommandError::Execution("failed".into()).status(), 1);
        assert_eq!(
            CommandError::CantCd("/nope".into()).to_string(),
            "can't cd to /nope"
        );
    }
}
