use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// Expands a leading `~` or `~/` to the home directory. `~user` forms and
    /// words without a leading tilde are returned untouched.
    pub fn expand<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let rest = match word.strip_prefix('~') {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => return Cow::Borrowed(word),
        };

        match self.home_dir() {
            Some(home) => {
                let mut expanded = home.to_string_lossy().into_owned();
                expanded.push_str(rest);
                Cow::Owned(expanded)
            }
            None => Cow::Borrowed(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let expander = PathExpander::new();
        let home = expander.home_dir().unwrap();
        assert_eq!(expander.expand("~"), home.to_string_lossy());
        assert_eq!(
            expander.expand("~/bin"),
            format!("{}/bin", home.to_string_lossy())
        );
    }

    #[test]
    fn test_leaves_other_words() {
        let expander = PathExpander::new();
        assert!(matches!(expander.expand("a~b"), Cow::Borrowed("a~b")));
        assert!(matches!(expander.expand("~root"), Cow::Borrowed("~root")));
        assert!(matches!(expander.expand("/tmp"), Cow::Borrowed("/tmp")));
    }
}
