use crate::config::toml_config::TomlConfig;
use crate::config::{Overrides, RunConfig};
use crate::domain::model::Command;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-dispatch")]
#[command(about = "Run display, print and serialize commands against a book")]
pub struct CliConfig {
    /// Path to a TOML file with [book], [[commands]] and [logging] tables
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Book title")]
    pub title: Option<String>,

    #[arg(long, help = "Book content")]
    pub content: Option<String>,

    /// Command as action:variant; repeat or separate with commas
    #[arg(short = 'c', long = "command", value_delimiter = ',', value_parser = parse_command)]
    pub commands: Vec<Command>,

    #[arg(long, help = "List the registered operations and exit")]
    pub list_operations: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        let overrides = Overrides {
            title: self.title.clone(),
            content: self.content.clone(),
            commands: self.commands.clone(),
        };

        Ok(RunConfig::resolve(overrides, file))
    }
}

fn parse_command(s: &str) -> std::result::Result<Command, String> {
    s.parse::<Command>().map_err(|e| e.to_string())
}
