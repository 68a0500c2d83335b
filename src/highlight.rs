use inksac::prelude::*;

/// Interactive prompt, coloured by the previous command's status when the
/// terminal supports it.
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    color_support: ColorSupport,
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    pub const TEXT: &'static str = "$ ";

    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn render(&self, last_status: i32) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return Self::TEXT.to_string();
        }

        let color = if last_status == 0 {
            Color::Green
        } else {
            Color::Red
        };
        let style = Style::builder().foreground(color).bold().build();
        Self::TEXT.style(style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt() {
        let prompt = Prompt::plain();
        assert_eq!(prompt.render(0), "$ ");
        assert_eq!(prompt.render(127), "$ ");
    }

    #[test]
    fn test_prompt_contains_text() {
        assert!(Prompt::new().render(1).contains("$ "));
    }
}
