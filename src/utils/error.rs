use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown crust: {name}")]
    UnknownCrustError { name: String },

    #[error("Unknown topping: {name}")]
    UnknownToppingError { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Order,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::IoError(_) => ErrorCategory::Io,
            MenuError::SerializationError(_) => ErrorCategory::Serialization,
            MenuError::ConfigValidationError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::MissingConfigError { .. } => ErrorCategory::Config,
            MenuError::UnknownCrustError { .. } | MenuError::UnknownToppingError { .. } => {
                ErrorCategory::Order
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Order => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MenuError::IoError(_) => {
                "Check that the file exists and the process can read/write it".to_string()
            }
            MenuError::SerializationError(_) => {
                "Check that the receipt data can be represented as JSON".to_string()
            }
            MenuError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the order file", field)
            }
            MenuError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            MenuError::MissingConfigError { field } => {
                format!("Add the required field '{}' to the configuration", field)
            }
            MenuError::UnknownCrustError { .. } => {
                "Pick a crust that exists on the menu (--dry-run lists them)".to_string()
            }
            MenuError::UnknownToppingError { .. } => {
                "Pick toppings that exist on the menu (--dry-run lists them)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::IoError(e) => format!("Could not read or write a file: {}", e),
            MenuError::SerializationError(_) => "Could not serialize the receipts".to_string(),
            MenuError::ConfigValidationError { field, message } => {
                format!("The order file is invalid ({}): {}", field, message)
            }
            MenuError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            MenuError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            MenuError::UnknownCrustError { name } => {
                format!("'{}' is not a crust on this menu", name)
            }
            MenuError::UnknownToppingError { name } => {
                format!("'{}' is not a topping on this menu", name)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
