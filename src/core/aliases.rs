use std::collections::HashSet;
use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AliasError {
    #[error("out of memory while storing alias")]
    OutOfMemory,
    #[error("{0} not found")]
    NotFound(String),
    #[error("{}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AliasError {
    pub fn status(&self) -> i32 {
        1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub value: String,
}

/// Alias table kept in insertion order.
///
/// Names are unique: adding an existing name rewrites its value in place, so
/// listings keep the position of the first definition.
#[derive(Debug, Default, Clone)]
pub struct AliasStore {
    entries: Vec<AliasEntry>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    fn value_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }

    pub fn add(&mut self, name: &str, value: &str) -> Result<AliasEntry, AliasError> {
        if let Some(index) = self.position(name) {
            let entry = &mut self.entries[index];
            entry.value = value.to_owned();
            return Ok(entry.clone());
        }

        self.entries
            .try_reserve(1)
            .map_err(|_| AliasError::OutOfMemory)?;

        let entry = AliasEntry {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn remove(&mut self, name: &str) -> Option<AliasEntry> {
        self.position(name).map(|index| self.entries.remove(index))
    }

    /// Removes every named alias that exists. Missing names are reported to
    /// `err` one per line and collected into the returned error; the
    /// remaining names are still processed.
    pub fn remove_all<I, S>(&mut self, names: I, err: &mut dyn Write) -> Result<(), AliasError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut missing = Vec::new();

        for name in names {
            let name = name.as_ref();
            if self.remove(name).is_none() {
                writeln!(err, "unalias: {} not found", name)?;
                missing.push(name.to_owned());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AliasError::Missing(missing))
        }
    }

    /// Follows the alias chain starting at `name` and returns the final value.
    ///
    /// Each hop looks up the whole previous value as an alias name. The walk
    /// stops at the first value that is not an alias, or at the first value
    /// naming an alias already visited; that value is returned as is, so a
    /// self-referential alias resolves to its own name.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let mut current = self.value_of(name)?;
        let mut visited = HashSet::from([name]);

        while !visited.contains(current) {
            match self.value_of(current) {
                Some(next) => {
                    visited.insert(current);
                    current = next;
                }
                None => break,
            }
        }

        Some(current.to_owned())
    }

    pub fn write_all(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}='{}'", entry.name, entry.value)?;
        }
        Ok(())
    }

    pub fn write_one(
        &self,
        name: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), AliasError> {
        match self.value_of(name) {
            Some(value) => {
                writeln!(out, "{}='{}'", name, value)?;
                Ok(())
            }
            None => {
                writeln!(err, "alias: {} not found", name)?;
                Err(AliasError::NotFound(name.to_owned()))
            }
        }
    }
}
