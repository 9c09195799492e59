use crate::utils::error::{DispatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub content: String,
}

impl Book {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Operation family. Matching is exact: `Display` or `DISPLAY` is not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Display,
    Print,
    Serialize,
}

impl Action {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "display" => Some(Action::Display),
            "print" => Some(Action::Print),
            "serialize" => Some(Action::Serialize),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Display => "display",
            Action::Print => "print",
            Action::Serialize => "serialize",
        }
    }
}

/// One dispatch step. Both halves stay raw strings: unrecognized actions are
/// skipped at dispatch time and variants are case-normalized during lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub action: String,
    pub variant: String,
}

impl Command {
    pub fn new(action: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            variant: variant.into(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action, self.variant)
    }
}

impl FromStr for Command {
    type Err = DispatchError;

    /// Parses `action:variant`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((action, variant)) => Ok(Command::new(action.trim(), variant.trim())),
            None => Err(DispatchError::InvalidCommandError {
                input: s.to_string(),
                reason: "expected the form action:variant".to_string(),
            }),
        }
    }
}
