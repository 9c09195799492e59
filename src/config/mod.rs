#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{Book, Command};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_TITLE: &str = "Sample Book";
pub const DEFAULT_CONTENT: &str = "This is some sample content.";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// The demo run used when neither flags nor a config file name any commands.
pub fn default_commands() -> Vec<Command> {
    vec![
        Command::new("display", "reverse"),
        Command::new("serialize", "xml"),
    ]
}

/// Values given directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub content: Option<String>,
    pub commands: Vec<Command>,
}

/// Book and commands after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub book: Book,
    pub commands: Vec<Command>,
    pub log_level: Option<String>,
}

impl RunConfig {
    pub fn resolve(overrides: Overrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();

        let title = overrides
            .title
            .or_else(|| file.title().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let content = overrides
            .content
            .or_else(|| file.content().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_CONTENT.to_string());

        let commands = if overrides.commands.is_empty() {
            file.commands.clone().unwrap_or_else(default_commands)
        } else {
            overrides.commands
        };

        Self {
            book: Book::new(title, content),
            commands,
            log_level: file.log_level().map(str::to_string),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn book(&self) -> Book {
        self.book.clone()
    }

    fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Only the log level is checked. Any title, content or command is accepted:
/// dispatch itself skips unrecognized actions and reports unknown variants.
impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
