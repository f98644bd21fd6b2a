use thiserror::Error;

/// Message shown to the user whenever a candidate file is refused.
pub const INVALID_FILE_MESSAGE: &str = "Please select a valid APK file.";

/// Errors surfaced by the intake flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("{}", INVALID_FILE_MESSAGE)]
    InvalidFileType { name: String },

    #[error("{}", INVALID_FILE_MESSAGE)]
    NoFileSelected,

    #[error("Intake controller is no longer running")]
    ControllerClosed,
}

impl IntakeError {
    /// Text for the transient error notification
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
