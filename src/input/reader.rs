use std::io::{self, BufRead};

/// Pulls whole lines from any buffered source.
pub struct LineReader {
    source: Box<dyn BufRead>,
    buffer: Vec<u8>,
}

impl LineReader {
    pub fn new(source: Box<dyn BufRead>) -> Self {
        Self {
            source,
            buffer: Vec::with_capacity(256),
        }
    }

    pub fn stdin() -> Self {
        Self::new(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Returns the next line with its trailing newline, or `None` at EOF.
    /// A final line without a newline is still returned.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        loop {
            match self.source.read_until(b'\n', &mut self.buffer) {
                Ok(0) if self.buffer.is_empty() => return Ok(None),
                Ok(_) => return Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

pub fn stdin_is_terminal() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}
