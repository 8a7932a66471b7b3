//! Error types for the Zipslides screens.
//!
//! Every failure in this application ends up as a toast, so each error type
//! carries the exact sentence shown to the user alongside its `Display`
//! form used in logs:
//!
//! - [`IntakeError`] - a candidate file was refused before upload
//! - [`UploadError`] - the simulated upload itself failed
//! - [`AuthError`] - login or signup form rejected
//! - [`AppError`] - top-level wrapper used by the CLI
//!
//! Conversion into [`AppError`] is automatic via `From`, so `?` works across
//! the boundaries.

use thiserror::Error;

use crate::config::MIN_PASSWORD_LEN;

// =============================================================================
// Intake Errors
// =============================================================================

/// Reasons a candidate file is refused by intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// Declared MIME type is not a presentation type.
    #[error("{name}: unsupported file type '{mime_type}'")]
    InvalidFileType { name: String, mime_type: String },

    /// Declared size is above the ceiling.
    #[error("{name}: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { name: String, size: u64, limit: u64 },
}

impl IntakeError {
    /// Name of the refused file.
    pub fn file_name(&self) -> &str {
        match self {
            IntakeError::InvalidFileType { name, .. } => name,
            IntakeError::FileTooLarge { name, .. } => name,
        }
    }

    /// Toast text for this rejection.
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::InvalidFileType { name, .. } => format!(
                "{} is not a valid file type. Please upload PPT or PDF files.",
                name
            ),
            IntakeError::FileTooLarge { name, limit, .. } => format!(
                "{} is too large. Maximum file size is {}MB.",
                name,
                limit / (1024 * 1024)
            ),
        }
    }
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Failures of the simulated upload step.
///
/// Any of these aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The session-local reference to the file could not be created.
    #[error("could not create a local reference for '{name}': {reason}")]
    LocalReference { name: String, reason: String },

    /// Anything else the platform reported.
    #[error("simulated upload failed: {0}")]
    Failed(String),
}

impl UploadError {
    /// Toast text; the same for every cause.
    pub fn user_message(&self) -> String {
        "Upload failed. Please try again.".to_string()
    }
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Login and signup form failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required field was left blank.
    #[error("empty credentials")]
    EmptyCredentials,

    /// Signup password and confirmation differ.
    #[error("passwords do not match")]
    PasswordsDoNotMatch,

    /// Signup password shorter than the minimum.
    #[error("password too short: {len} < {min}")]
    PasswordTooShort { len: usize, min: usize },

    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

impl AuthError {
    /// Builds [`AuthError::PasswordTooShort`] against the configured minimum.
    pub fn too_short(len: usize) -> Self {
        AuthError::PasswordTooShort {
            len,
            min: MIN_PASSWORD_LEN,
        }
    }

    /// Toast text for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::EmptyCredentials => "Please fill in all fields".to_string(),
            AuthError::PasswordsDoNotMatch => "Passwords do not match".to_string(),
            AuthError::PasswordTooShort { min, .. } => {
                format!("Password must be at least {} characters long", min)
            }
            AuthError::AlreadySubmitting => "Please wait...".to_string(),
        }
    }
}

// =============================================================================
// Top-level
// =============================================================================

/// Top-level error for the command-line driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Cannot read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for intake checks.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for upload simulation.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for auth forms.
pub type AuthResult<T> = Result<T, AuthError>;

/// Result type for the CLI.
pub type AppResult<T> = Result<T, AppError>;
