use std::io::Write;

use log::{info, warn};

mod environment;
mod executor;
pub mod pipeline;
mod streams;

pub use streams::{CaptureBuffer, Streams};

use crate::{
    core::{commands::BuiltinTable, ShellState},
    error::ShellError,
    highlight::Prompt,
    input::LineReader,
    process::ProcessExecutor,
};

use executor::CommandHandler;
use pipeline::{commands, is_bare_exit, is_noop, statements, strip_comments};

/// What the session does after a line, statement or command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(i32),
    Exit(i32),
}

impl Flow {
    pub fn status(self) -> i32 {
        match self {
            Flow::Continue(code) | Flow::Exit(code) => code,
        }
    }
}

pub struct Shell {
    pub state: ShellState,
    pub(crate) streams: Streams,
    pub(crate) builtins: BuiltinTable,
    pub(crate) executor: ProcessExecutor,
}

impl Shell {
    pub fn new(prog_name: impl Into<String>) -> Self {
        Self::with_streams(prog_name, Streams::stdio())
    }

    pub fn with_streams(prog_name: impl Into<String>, streams: Streams) -> Self {
        Shell {
            state: ShellState::new(prog_name),
            streams,
            builtins: BuiltinTable::new(),
            executor: ProcessExecutor::new(),
        }
    }

    /// Runs one line read from the session input; it counts as an invocation.
    pub fn interpret(&mut self, line: &str) -> Flow {
        self.state.invocations += 1;
        self.execute_line(line)
    }

    /// Splits `line` into statements and commands and runs each in turn.
    /// Blank and comment-only lines leave the last status untouched.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        if is_noop(line) {
            return Flow::Continue(self.state.last_status);
        }

        let line = strip_comments(line);
        for statement in statements(&line) {
            if is_bare_exit(statement) {
                return Flow::Exit(self.state.last_status);
            }

            for command in commands(statement) {
                match self.execute_command(command) {
                    Flow::Continue(code) => self.state.last_status = code,
                    exit @ Flow::Exit(_) => return exit,
                }
            }
        }

        Flow::Continue(self.state.last_status)
    }

    /// Feeds a whole file's text through `execute_line`, line by line.
    pub fn execute_script(&mut self, content: &str) -> Flow {
        for line in content.split_inclusive('\n') {
            if let exit @ Flow::Exit(_) = self.execute_line(line) {
                return exit;
            }
        }
        Flow::Continue(self.state.last_status)
    }

    /// Reads and runs lines until EOF or `exit`, returning the session's
    /// final status. The prompt is only shown when one is given.
    pub fn run(&mut self, mut reader: LineReader, prompt: Option<&Prompt>) -> Result<i32, ShellError> {
        info!("session started as {}", self.state.prog_name);

        loop {
            if let Some(prompt) = prompt {
                write!(self.streams.out, "{}", prompt.render(self.state.last_status))?;
                self.streams.out.flush()?;
            }

            let Some(line) = reader.read_line()? else {
                if prompt.is_some() {
                    writeln!(self.streams.out)?;
                }
                break;
            };

            if let Flow::Exit(code) = self.interpret(&line) {
                info!("exit requested with status {}", code);
                self.streams.flush()?;
                return Ok(code);
            }
        }

        info!("end of input, last status {}", self.state.last_status);
        self.streams.flush()?;
        Ok(self.state.last_status)
    }

    /// Writes one diagnostic line to the shell's stderr.
    pub(crate) fn report(&mut self, message: &str) {
        if let Err(e) = writeln!(self.streams.err, "{}", message) {
            warn!("could not write diagnostic: {}", e);
        }
    }
}
