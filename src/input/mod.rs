mod reader;

pub use reader::{stdin_is_terminal, LineReader};
