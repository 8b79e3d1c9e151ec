use clap::ValueEnum;
use supports_color::Stream;
use tracing::debug;

/// When to emit ANSI colors on stdout
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    pub fn apply(self) {
        let enabled = self.enabled();
        debug!("Terminal colors enabled: {enabled}");
        colored::control::set_override(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ColorChoice::Always, true)]
    #[case(ColorChoice::Never, false)]
    fn explicit_choices_ignore_the_terminal(#[case] choice: ColorChoice, #[case] expected: bool) {
        assert_eq!(choice.enabled(), expected);
    }
}
