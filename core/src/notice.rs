//! User-visible notifications.
//!
//! Every outcome the screens report (upload done, file refused, link copied,
//! login failed) becomes a [`Notice`]. The browser renders them as toasts,
//! the CLI prints them.

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Operation completed
    Success,
    /// Operation failed or input refused
    Error,
}

impl NoticeLevel {
    /// CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast-success",
            NoticeLevel::Error => "toast-error",
        }
    }

    /// Prefix for terminal display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Notices shared by more than one screen.
pub mod messages {
    pub const LINK_COPIED: &str = "Link copied to clipboard!";
    pub const COPY_FAILED: &str = "Failed to copy link";
    pub const PRESENTATION_DELETED: &str = "Presentation deleted successfully";
    pub const LOGGED_OUT: &str = "Logged out successfully";
    pub const PROFILE_SAVED: &str = "Profile updated";
    pub const LOGIN_OK: &str = "Login successful!";
    pub const SIGNUP_OK: &str = "Account created successfully!";
}
