//! Driver configuration: CLI flags with environment fallbacks.

use quill_diagnostic::emitter::ColorMode;
use quill_locale::Locales;
use quill_types::Context;

/// A flag the driver could not make sense of.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color mode '{0}', expected auto, always or never")]
    InvalidColor(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Settings for one driver run.
#[derive(Clone, Debug)]
pub struct Config {
    pub locales: Locales,
    pub color: ColorMode,
    /// Language codes known in addition to the built-in list.
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locales: Locales::english(),
            color: ColorMode::Auto,
            languages: Vec::new(),
        }
    }
}

impl Config {
    /// Split `args` into options and positional arguments.
    ///
    /// `QUILL_LOCALE` and `QUILL_COLOR` apply first; flags override them.
    pub fn from_args(args: &[String]) -> Result<(Config, Vec<String>), ConfigError> {
        Self::from_args_with_env(args, |name| std::env::var(name).ok())
    }

    /// [`Config::from_args`] with an explicit environment lookup.
    pub fn from_args_with_env(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Config, Vec<String>), ConfigError> {
        let mut config = Config::default();
        if let Some(locale) = env("QUILL_LOCALE") {
            config.locales = Locales::from_preference(&locale);
        }
        if let Some(color) = env("QUILL_COLOR") {
            config.color = parse_color(&color)?;
        }

        let mut positional = Vec::new();
        for arg in args {
            if let Some(locale) = arg.strip_prefix("--locale=") {
                config.locales = Locales::from_preference(locale);
            } else if let Some(color) = arg.strip_prefix("--color=") {
                config.color = parse_color(color)?;
            } else if let Some(codes) = arg.strip_prefix("--languages=") {
                config.languages.extend(
                    codes
                        .split(',')
                        .map(str::trim)
                        .filter(|code| !code.is_empty())
                        .map(String::from),
                );
            } else if arg.starts_with("--") {
                return Err(ConfigError::UnknownOption(arg.clone()));
            } else {
                positional.push(arg.clone());
            }
        }
        Ok((config, positional))
    }

    /// The checking context, with the extra languages added.
    pub fn context(&self) -> Context {
        Context::new().with_languages(self.languages.iter().cloned())
    }

    /// Whether stderr is a terminal, for [`ColorMode::Auto`].
    pub fn stderr_is_tty() -> bool {
        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }
}

fn parse_color(value: &str) -> Result<ColorMode, ConfigError> {
    ColorMode::parse(value).ok_or_else(|| ConfigError::InvalidColor(value.to_string()))
}
