use super::{Command, CommandError};
use crate::shell::{Flow, Shell};

/// Ends the session. Without an argument the last status is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    fn parse_status(arg: &str) -> Result<i32, CommandError> {
        arg.parse::<u64>()
            .map(|n| (n % 256) as i32)
            .map_err(|_| CommandError::IllegalNumber(arg.to_owned()))
    }
}

impl Command for ExitCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError> {
        let status = match args.first() {
            Some(arg) => Self::parse_status(arg)?,
            None => shell.state.last_status,
        };
        Ok(Flow::Exit(status))
    }
}
