use thiserror::Error;

#[derive(Error, Debug)]
pub enum RealtyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Contact file error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot read legacy broker file '{path}': {source}")]
    ImportFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },
}

/// Broad classes of failure, used for exit codes and user messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad or missing user input. Nothing was changed.
    Validation,
    /// The contact file, legacy import or clipboard could not be used.
    Io,
    /// The TOML configuration is unusable.
    Config,
}

impl RealtyError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::ClipboardError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::ConfigError { .. } => ErrorCategory::Config,
            Self::IoError(_)
            | Self::CsvError(_)
            | Self::SerializationError(_)
            | Self::ImportFileError { .. }
            | Self::ClipboardError { .. } => ErrorCategory::Io,
        }
    }

    /// True when the error is a plain "file does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { field, message } => {
                format!("Invalid input for '{}': {}", field, message)
            }
            Self::IoError(e) => format!("Could not access the contact file: {}", e),
            Self::CsvError(e) => format!("The contact file could not be read or written: {}", e),
            Self::SerializationError(e) => format!("The legacy broker file is not valid JSON: {}", e),
            Self::ImportFileError { path, source } => {
                format!("Could not read the legacy broker file '{}': {}", path, source)
            }
            Self::ClipboardError { message } => format!("Could not use the clipboard: {}", message),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => "Check the highlighted field and try again",
            Self::IoError(_) => "Make sure the data directory exists and is writable",
            Self::CsvError(_) => "Restore the contact file from a backup or move it aside to start fresh",
            Self::SerializationError(_) => "Pass the brokers.json file written by the desktop tool",
            Self::ImportFileError { .. } => "Check the path to the legacy brokers.json file",
            Self::ClipboardError { .. } => "Use --output to write the agreement to a file instead",
            Self::ConfigError { .. } => "Fix the TOML file or remove it to fall back to defaults",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io => 1,
            ErrorCategory::Validation => 2,
            ErrorCategory::Config => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RealtyError>;
