pub mod aliases;
pub mod commands;
pub mod config;
pub mod state;

pub use aliases::{AliasEntry, AliasError, AliasStore};
pub use state::ShellState;
