use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("No operation registered for '{key}' (action: {action}, variant: {variant})")]
    UnknownOperation {
        key: String,
        action: String,
        variant: String,
    },

    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("XML serialization error: {message}")]
    XmlError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommandError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Output,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DispatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DispatchError::UnknownOperation { .. } => ErrorCategory::Lookup,
            DispatchError::OutputError(_) => ErrorCategory::Output,
            DispatchError::SerializationError(_) | DispatchError::XmlError { .. } => {
                ErrorCategory::Serialization
            }
            DispatchError::ConfigError { .. }
            | DispatchError::ConfigValidationError { .. }
            | DispatchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DispatchError::InvalidCommandError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DispatchError::UnknownOperation { action, .. } => match action.as_str() {
                "display" | "print" => {
                    format!("Use one of the '{action}' variants: console, reverse")
                }
                "serialize" => "Use one of the 'serialize' variants: json, xml".to_string(),
                _ => "Check the variant name for this action".to_string(),
            },
            DispatchError::OutputError(_) => {
                "Check that standard output is writable (closed pipe or full disk?)".to_string()
            }
            DispatchError::SerializationError(_) | DispatchError::XmlError { .. } => {
                "Check the book fields for content that cannot be encoded".to_string()
            }
            DispatchError::ConfigError { .. } | DispatchError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            DispatchError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{field}' and try again")
            }
            DispatchError::InvalidCommandError { .. } => {
                "Write commands as action:variant, e.g. display:reverse".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DispatchError::UnknownOperation { action, variant, .. } => {
                format!("Unknown {action} variant '{variant}'")
            }
            DispatchError::OutputError(e) => format!("Could not write output: {e}"),
            DispatchError::SerializationError(e) => format!("Could not serialize the book: {e}"),
            DispatchError::XmlError { message } => {
                format!("Could not serialize the book as XML: {message}")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
