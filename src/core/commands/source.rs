use std::fs;

use super::{Command, CommandError};
use crate::path::PathExpander;
use crate::shell::{Flow, Shell};

/// Nested `source` calls deeper than this are refused.
const MAX_DEPTH: usize = 64;

/// Runs every line of a file through the statement pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceCommand;

impl Command for SourceCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<Flow, CommandError> {
        let Some(file) = args.first() else {
            return Err(CommandError::Usage("usage: source FILE"));
        };
        if shell.state.source_depth >= MAX_DEPTH {
            return Err(CommandError::Execution(format!(
                "{}: nested too deeply",
                file
            )));
        }

        let path = PathExpander::new().expand(file).into_owned();
        let content = fs::read_to_string(&path).map_err(|_| CommandError::CantOpen(path))?;

        shell.state.source_depth += 1;
        let flow = shell.execute_script(&content);
        shell.state.source_depth -= 1;
        Ok(flow)
    }
}
