use super::CommandError;
use crate::core::aliases::{AliasError, AliasStore};
use crate::shell::Streams;

/// `alias` and `unalias`. These see the raw command text rather than the
/// tokenized words, so quoted values keep their inner whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasCommand;

impl AliasCommand {
    pub fn handles(name: &str) -> bool {
        matches!(name, "alias" | "unalias")
    }

    pub fn execute(
        &self,
        aliases: &mut AliasStore,
        streams: &mut Streams,
        raw: &str,
    ) -> Result<i32, CommandError> {
        let mut words = split_arguments(raw).into_iter();
        let Some(name) = words.next() else {
            return Ok(0);
        };
        let args: Vec<String> = words.collect();

        match name.as_str() {
            "unalias" => self.unalias(aliases, streams, &args),
            _ => self.alias(aliases, streams, &args),
        }
    }

    fn alias(
        &self,
        aliases: &mut AliasStore,
        streams: &mut Streams,
        args: &[String],
    ) -> Result<i32, CommandError> {
        if args.is_empty() {
            aliases.write_all(&mut streams.out)?;
            return Ok(0);
        }

        let mut status = 0;
        for arg in args {
            match arg.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    aliases.add(name, value)?;
                }
                _ => match aliases.write_one(arg, &mut streams.out, &mut streams.err) {
                    Ok(()) => {}
                    Err(AliasError::NotFound(_)) => status = 1,
                    Err(e) => return Err(e.into()),
                },
            }
        }
        Ok(status)
    }

    fn unalias(
        &self,
        aliases: &mut AliasStore,
        streams: &mut Streams,
        args: &[String],
    ) -> Result<i32, CommandError> {
        if args.is_empty() {
            return Err(CommandError::Usage("usage: unalias name [name ...]"));
        }

        match aliases.remove_all(args, &mut streams.err) {
            Ok(()) => Ok(0),
            Err(AliasError::Missing(_)) => Ok(1),
            Err(e) => Err(e.into()),
        }
    }
}

/// Splits on whitespace outside quotes. Quote characters are removed, so
/// `ll='ls -l'` becomes the single word `ll=ls -l`.
fn split_arguments(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(current);
    }
    words
}
