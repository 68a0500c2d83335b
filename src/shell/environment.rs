use std::env;

use crate::path::PathExpander;

pub(crate) trait EnvironmentHandler {
    fn expand_variables(&self, args: Vec<String>) -> Vec<String>;
}

impl EnvironmentHandler for super::Shell {
    fn expand_variables(&self, args: Vec<String>) -> Vec<String> {
        let status = self.state.last_status;
        let pid = std::process::id();
        let expander = PathExpander::new();

        args.into_iter()
            .filter_map(|arg| expand_word(&expander.expand(&arg), status, pid))
            .collect()
    }
}

/// Substitutes `$?`, `$$` and `$NAME` inside one word. Returns `None` when
/// the word was made only of variables and they all expanded to nothing.
pub(crate) fn expand_word(word: &str, status: i32, pid: u32) -> Option<String> {
    if !word.contains('$') {
        return Some(word.to_owned());
    }

    let mut result = String::with_capacity(word.len());
    let mut only_variables = true;
    let mut rest = word;

    while let Some(dollar_pos) = rest.find('$') {
        if dollar_pos > 0 {
            only_variables = false;
            result.push_str(&rest[..dollar_pos]);
        }

        let after = &rest[dollar_pos + 1..];
        match after.chars().next() {
            Some('?') => {
                result.push_str(&status.to_string());
                rest = &after[1..];
            }
            Some('$') => {
                result.push_str(&pid.to_string());
                rest = &after[1..];
            }
            Some(c) if c.is_alphanumeric() || c == '_' => {
                let var_end = after
                    .find(|c: char| !c.is_alphanumeric() && c != '_')
                    .unwrap_or(after.len());
                if let Ok(value) = env::var(&after[..var_end]) {
                    result.push_str(&value);
                }
                rest = &after[var_end..];
            }
            _ => {
                only_variables = false;
                result.push('$');
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        only_variables = false;
        result.push_str(rest);
    }

    if only_variables && result.is_empty() {
        None
    } else {
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_parameters() {
        assert_eq!(expand_word("$?", 3, 42).as_deref(), Some("3"));
        assert_eq!(expand_word("$$", 0, 42).as_deref(), Some("42"));
        assert_eq!(expand_word("x$?y", 1, 42).as_deref(), Some("x1y"));
    }

    #[test]
    fn test_environment_variables() {
        env::set_var("SHOAL_EXPAND_TEST", "value");
        assert_eq!(
            expand_word("$SHOAL_EXPAND_TEST", 0, 1).as_deref(),
            Some("value")
        );
        assert_eq!(
            expand_word("pre-$SHOAL_EXPAND_TEST/post", 0, 1).as_deref(),
            Some("pre-value/post")
        );
    }

    #[test]
    fn test_unset_variable_drops_word() {
        assert_eq!(expand_word("$SHOAL_SURELY_UNSET", 0, 1), None);
        assert_eq!(
            expand_word("a$SHOAL_SURELY_UNSET", 0, 1).as_deref(),
            Some("a")
        );
    }

    #[test]
    fn test_lone_dollar_is_literal() {
        assert_eq!(expand_word("$", 0, 1).as_deref(), Some("$"));
        assert_eq!(expand_word("cost$", 0, 1).as_deref(), Some("cost$"));
        assert_eq!(expand_word("$-x", 0, 1).as_deref(), Some("$-x"));
    }
}
