use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobOptionsError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobOptionsError {
    /// A required option was left empty. `hint` tells the user how to set it.
    #[error("{hint}")]
    MissingRequiredOption { option: &'static str, hint: String },
}

impl JobOptionsError {
    pub fn missing(option: &'static str, hint: impl Into<String>) -> Self {
        JobOptionsError::MissingRequiredOption {
            option,
            hint: hint.into(),
        }
    }

    /// Name of the option this error is about.
    pub fn option(&self) -> &'static str {
        match self {
            JobOptionsError::MissingRequiredOption { option, .. } => option,
        }
    }
}
