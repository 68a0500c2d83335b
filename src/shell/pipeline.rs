//! Splitting raw input into statements, commands and `&&`/`||` chains.
//!
//! Everything here is pure string work; nothing is executed. The chain
//! evaluator takes the runner as a closure so short-circuit decisions can be
//! checked without spawning anything.

use std::borrow::Cow;

use log::trace;

use super::Flow;

/// Default word delimiters.
pub const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Splits `text` on any of `delimiters`, dropping empty pieces.
pub fn tokenize(text: &str, delimiters: &[char]) -> Vec<String> {
    text.split(delimiters)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn tokenize_words(text: &str) -> Vec<String> {
    tokenize(text, WHITESPACE)
}

/// Removes `#` comments. A `#` starts a comment only at the beginning of a
/// line or after whitespace; the comment runs to the end of that line.
pub fn strip_comments(input: &str) -> Cow<'_, str> {
    if !input.contains('#') {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut in_comment = false;
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
                result.push(c);
            }
        } else if c == '#' && prev.map_or(true, char::is_whitespace) {
            in_comment = true;
        } else {
            result.push(c);
        }
        prev = Some(c);
    }

    Cow::Owned(result)
}

/// True for input that must not reach the dispatcher at all.
pub fn is_noop(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Newline-delimited statements, blank ones dropped.
pub fn statements(line: &str) -> Vec<&str> {
    line.split('\n')
        .filter(|statement| !statement.trim().is_empty())
        .collect()
}

/// Semicolon-delimited commands of one statement, blank ones dropped.
pub fn commands(statement: &str) -> Vec<&str> {
    statement
        .split([';', '\n'])
        .filter(|command| !command.trim().is_empty())
        .collect()
}

/// A statement that is exactly `exit`, which ends the session before any
/// alias or operator handling.
pub fn is_bare_exit(statement: &str) -> bool {
    statement.trim() == "exit"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOperator {
    And,
    Or,
}

impl ChainOperator {
    pub fn token(self) -> &'static str {
        match self {
            ChainOperator::And => "&&",
            ChainOperator::Or => "||",
        }
    }

    /// Whether the segment after this operator runs, given the status of
    /// the segment before it.
    pub fn permits(self, status: i32) -> bool {
        match self {
            ChainOperator::And => status == 0,
            ChainOperator::Or => status != 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLink<'a> {
    /// Operator joining this segment to the previous one; `None` for the head.
    pub condition: Option<ChainOperator>,
    pub segment: &'a str,
}

/// One command split at its `&&`/`||` operators, strictly left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<'a> {
    links: Vec<ChainLink<'a>>,
}

fn find_operator(text: &str) -> Option<(usize, ChainOperator)> {
    let and = text.find("&&").map(|pos| (pos, ChainOperator::And));
    let or = text.find("||").map(|pos| (pos, ChainOperator::Or));

    match (and, or) {
        (Some(a), Some(o)) => Some(if a.0 < o.0 { a } else { o }),
        (found, None) | (None, found) => found,
    }
}

impl<'a> Chain<'a> {
    pub fn parse(command: &'a str) -> Self {
        let mut links = Vec::new();
        let mut condition = None;
        let mut rest = command;

        while let Some((pos, operator)) = find_operator(rest) {
            links.push(ChainLink {
                condition,
                segment: &rest[..pos],
            });
            condition = Some(operator);
            rest = &rest[pos + operator.token().len()..];
        }
        links.push(ChainLink {
            condition,
            segment: rest,
        });

        trace!("chain {:?} -> {} segment(s)", command, links.len());
        Self { links }
    }

    pub fn links(&self) -> &[ChainLink<'a>] {
        &self.links
    }

    /// Runs segments in order. A segment whose operator does not permit the
    /// current status is skipped together with everything after it. The
    /// result is the status of the last segment that ran, or `initial` if
    /// none did.
    pub fn evaluate<F>(&self, initial: i32, mut run: F) -> Flow
    where
        F: FnMut(&'a str, i32) -> Flow,
    {
        let mut status = initial;

        for link in &self.links {
            if let Some(operator) = link.condition {
                if !operator.permits(status) {
                    trace!("short-circuit at {} with status {}", operator.token(), status);
                    break;
                }
            }

            match run(link.segment, status) {
                Flow::Continue(code) => status = code,
                exit @ Flow::Exit(_) => return exit,
            }
        }

        Flow::Continue(status)
    }
}
