use std::path::PathBuf;

use clap::Parser;

/// Command-line options.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "shoal", version, about = "A small command interpreter")]
pub struct Flags {
    /// Suppress the interactive prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Startup file to run instead of ~/.shoalrc
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not run any startup file
    #[arg(long, conflicts_with = "config")]
    pub norc: bool,

    /// Read commands from this file instead of stdin
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

impl Flags {
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "off"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let flags =
            Flags::try_parse_from(["shoal", "-q", "--config", "/tmp/rc", "script.sh"]).unwrap();
        assert!(flags.quiet);
        assert!(!flags.debug);
        assert_eq!(flags.config, Some(PathBuf::from("/tmp/rc")));
        assert_eq!(flags.script, Some(PathBuf::from("script.sh")));
        assert_eq!(flags.log_filter(), "off");
    }

    #[test]
    fn test_norc_conflicts_with_config() {
        assert!(Flags::try_parse_from(["shoal", "--norc", "-c", "rc"]).is_err());
    }

    #[test]
    fn test_debug_filter() {
        let flags = Flags::try_parse_from(["shoal", "-d"]).unwrap();
        assert_eq!(flags.log_filter(), "debug");
    }
}
