use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("Invalid pricing plan: {value}")]
    InvalidPlan { value: String },

    #[error("Invalid weekly cost for {student}: {cost}")]
    InvalidWeeklyCost { student: String, cost: f64 },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input ended while reading {field}")]
    InputExhausted { field: String },

    #[error("No tutoring hours were recorded for the team")]
    NoHoursWorked,

    #[error("Reconciliation failed: payouts and donations total {actual:.2}, expected {expected:.2} (tolerance {tolerance})")]
    Reconciliation {
        expected: f64,
        actual: f64,
        tolerance: f64,
    },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Computation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PayoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PayoutError::InvalidPlan { .. }
            | PayoutError::InvalidWeeklyCost { .. }
            | PayoutError::InvalidInput { .. }
            | PayoutError::InputExhausted { .. } => ErrorCategory::Input,
            PayoutError::NoHoursWorked | PayoutError::Reconciliation { .. } => {
                ErrorCategory::Computation
            }
            PayoutError::ConfigValidationError { .. }
            | PayoutError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PayoutError::IoError(_) | PayoutError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Computation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PayoutError::InvalidPlan { .. } => "Use one of: ms, hsPrep, hs, collPrep, hsSplit",
            PayoutError::InvalidWeeklyCost { .. } => {
                "Check the pricing rates and biweekly discount in the policy file"
            }
            PayoutError::InvalidInput { .. } => "Enter a whole, non-negative number",
            PayoutError::InputExhausted { .. } => "Provide answers for every prompt",
            PayoutError::NoHoursWorked => "Record at least one processed payment",
            PayoutError::Reconciliation { .. } => {
                "Check the spelling of tutors' names against the management team"
            }
            PayoutError::ConfigValidationError { .. }
            | PayoutError::InvalidConfigValueError { .. } => "Fix the policy file and try again",
            PayoutError::IoError(_) => "Check that the file exists and is readable",
            PayoutError::SerializationError(_) => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PayoutError::Reconciliation { .. } | PayoutError::NoHoursWorked => {
                "There has been a math error...".to_string()
            }
            PayoutError::InvalidWeeklyCost { .. } => "ERROR: Invalid weekly cost!".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PayoutError>;
