use crate::core::aliases::AliasStore;
use crate::path::PathList;

/// Per-session mutable state threaded through every pipeline stage.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub prog_name: String,
    pub last_status: i32,
    pub invocations: u64,
    pub source_depth: usize,
    pub path_list: Option<PathList>,
    pub aliases: AliasStore,
}

impl ShellState {
    pub fn new(prog_name: impl Into<String>) -> Self {
        Self {
            prog_name: prog_name.into(),
            last_status: 0,
            invocations: 0,
            source_depth: 0,
            path_list: PathList::from_env(),
            aliases: AliasStore::new(),
        }
    }

    /// Re-reads `PATH` after a builtin changed it.
    pub fn refresh_path(&mut self) {
        self.path_list = PathList::from_env();
    }

    /// `<prog>: <count>: ` prefix shared by every diagnostic the shell prints.
    pub fn diagnostic_prefix(&self) -> String {
        format!("{}: {}: ", self.prog_name, self.invocations)
    }
}
