use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use clap::Parser;
use log::debug;
use shoal::core::config::{ConfigLoader, ConfigPaths};
use shoal::error::ShellError;
use shoal::flags::Flags;
use shoal::highlight::Prompt;
use shoal::input::{stdin_is_terminal, LineReader};
use shoal::{Flow, Shell};

fn run(flags: &Flags, prog_name: &str) -> Result<i32, ShellError> {
    let mut shell = Shell::new(prog_name);

    if !flags.norc {
        let paths = ConfigPaths::new(flags.config.clone());
        if let Flow::Exit(code) = ConfigLoader::new(&paths).load(&mut shell)? {
            return Ok(code);
        }
    }

    let (reader, interactive) = match &flags.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| ShellError::Script {
                path: path.clone(),
                source,
            })?;
            (LineReader::new(Box::new(BufReader::new(file))), false)
        }
        None => (LineReader::stdin(), stdin_is_terminal()),
    };
    debug!("interactive: {}", interactive);

    let prompt = (interactive && !flags.quiet).then(Prompt::new);
    shell.run(reader, prompt.as_ref())
}

fn main() {
    let flags = Flags::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(flags.log_filter()))
        .init();

    let prog_name = env::args().next().unwrap_or_else(|| "shoal".to_string());

    match run(&flags, &prog_name) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", prog_name, e);
            process::exit(e.status());
        }
    }
}
