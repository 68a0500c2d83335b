use std::path::Path;

use log::debug;

use super::environment::EnvironmentHandler;
use super::pipeline::{tokenize_words, Chain};
use super::Flow;
use crate::core::commands::{AliasCommand, Command, CommandType};
use crate::path::{exists, is_executable};
use crate::process::{ProcessError, CANNOT_EXECUTE, CMD_NOT_FOUND};

pub(crate) trait CommandHandler {
    /// Evaluates one `;`-delimited command and its `&&`/`||` chain.
    fn execute_command(&mut self, command: &str) -> Flow;
    /// Classifies and runs one simple command.
    fn dispatch(&mut self, segment: &str) -> Flow;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, command: &str) -> Flow {
        let chain = Chain::parse(command);
        chain.evaluate(self.state.last_status, |segment, _| {
            let flow = self.dispatch(segment);
            if let Flow::Continue(code) = flow {
                self.state.last_status = code;
            }
            flow
        })
    }

    fn dispatch(&mut self, segment: &str) -> Flow {
        let args = tokenize_words(segment);
        let Some(first) = args.first() else {
            return Flow::Continue(self.state.last_status);
        };

        if AliasCommand::handles(first) {
            return Flow::Continue(self.manage_aliases(first, segment));
        }

        let mut args = self.expand_variables(args);
        if let Some(value) = args.first().and_then(|name| self.state.aliases.resolve(name)) {
            debug!("alias {} -> {}", args[0], value);
            args = build_alias_command(args, &value);
        }
        if args.is_empty() {
            return Flow::Continue(self.state.last_status);
        }

        if let Some(builtin) = self.builtins.lookup(&args[0]) {
            debug!("builtin {}", args[0]);
            return self.run_builtin(builtin, &args);
        }

        Flow::Continue(self.run_external(&args))
    }
}

/// Swaps the command word for the tokens of its alias value; the remaining
/// arguments are kept as they were.
fn build_alias_command(args: Vec<String>, value: &str) -> Vec<String> {
    let mut expanded = tokenize_words(value);
    expanded.extend(args.into_iter().skip(1));
    expanded
}

impl super::Shell {
    fn manage_aliases(&mut self, name: &str, segment: &str) -> i32 {
        match AliasCommand.execute(&mut self.state.aliases, &mut self.streams, segment) {
            Ok(code) => code,
            Err(e) => {
                let message = format!("{}{}: {}", self.state.diagnostic_prefix(), name, e);
                self.report(&message);
                e.status()
            }
        }
    }

    fn run_builtin(&mut self, builtin: CommandType, args: &[String]) -> Flow {
        match builtin.execute(self, &args[1..]) {
            Ok(flow) => flow,
            Err(e) => {
                let message = format!("{}{}: {}", self.state.diagnostic_prefix(), args[0], e);
                self.report(&message);
                Flow::Continue(e.status())
            }
        }
    }

    /// PATH lookup for bare names, direct execution for names with a `/`.
    fn run_external(&mut self, args: &[String]) -> i32 {
        let name = args[0].as_str();

        if !name.contains('/') {
            let found = self
                .state
                .path_list
                .as_ref()
                .and_then(|paths| paths.find_executable(name));
            return match found {
                Some(program) => {
                    debug!("{} resolved to {}", name, program.display());
                    self.spawn(&program, args)
                }
                None => self.command_not_found(name),
            };
        }

        let program = Path::new(name);
        if is_executable(program) {
            self.spawn(program, args)
        } else if exists(program) {
            let message = format!("{}Permission denied", self.state.diagnostic_prefix());
            self.report(&message);
            CANNOT_EXECUTE
        } else {
            self.command_not_found(name)
        }
    }

    fn spawn(&mut self, program: &Path, args: &[String]) -> i32 {
        if let Err(e) = self.streams.flush() {
            debug!("flush before spawn failed: {}", e);
        }

        match self.executor.run(program, args) {
            Ok(code) => code,
            Err(ProcessError::NotFound(_)) => self.command_not_found(&args[0]),
            Err(e @ ProcessError::PermissionDenied(_)) => {
                let message = format!("{}{}", self.state.diagnostic_prefix(), e);
                self.report(&message);
                e.status()
            }
            Err(e) => {
                self.report(&e.to_string());
                e.status()
            }
        }
    }

    fn command_not_found(&mut self, name: &str) -> i32 {
        let message = format!("{}{}: not found", self.state.diagnostic_prefix(), name);
        self.report(&message);
        CMD_NOT_FOUND
    }
}
