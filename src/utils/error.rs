use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
}

impl DrillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::IoError(_) => ErrorCategory::Io,
            DrillError::ConfigParseError(_)
            | DrillError::ConfigError { .. }
            | DrillError::ValidationError { .. } => ErrorCategory::Configuration,
            DrillError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::IoError(e) => format!("Could not read or write a stream: {}", e),
            DrillError::ConfigParseError(e) => format!("The config file is not valid TOML: {}", e),
            DrillError::ConfigError { message } => format!("Configuration problem: {}", message),
            DrillError::ValidationError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
            DrillError::InputError { message } => format!("Bad input: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::IoError(_) => "Check that stdin/stdout are open and readable/writable",
            DrillError::ConfigParseError(_) => "Fix the TOML syntax in the config file",
            DrillError::ConfigError { .. } => "Check that the config file exists and is readable",
            DrillError::ValidationError { .. } => "Correct the field value in the config file",
            DrillError::InputError { .. } => "Pipe exactly one line into standard input",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

/// Logs a top-level failure, prints the friendly form to stderr and
/// returns the process exit code for it.
pub fn report(err: &anyhow::Error) -> i32 {
    tracing::error!("❌ {:#}", err);

    match err.downcast_ref::<DrillError>() {
        Some(e) => {
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
        None => {
            eprintln!("❌ {:#}", err);
            1
        }
    }
}
