//! Application state shared by every screen.
//!
//! One [`AppState`] per page session holds the mock session and the
//! presentation registry. The browser keeps it in a single reactive signal
//! provided through context; every write goes through the methods here so
//! that each mutation and the toast it produces stay together.

use crate::auth::AuthSuccess;
use crate::models::{PresentationRecord, UserProfile};
use crate::notice::{messages, Notice};
use crate::registry::PresentationRegistry;
use crate::upload::UploadEvent;

/// Nominal identity of whoever is using the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    profile: Option<UserProfile>,
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Current profile; the demo account when nobody signed in.
    pub fn profile(&self) -> UserProfile {
        self.profile.clone().unwrap_or_else(UserProfile::demo)
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
    }
}

/// Everything the screens read and write.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Session,
    pub registry: PresentationRegistry,
    /// Set while an upload batch is running
    uploading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh page session: nobody signed in, sample presentations loaded.
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            registry: PresentationRegistry::with_samples(),
            uploading: false,
        }
    }

    /// Record a successful login/signup.
    pub fn apply_auth(&mut self, success: &AuthSuccess) -> Notice {
        self.session.sign_in(success.profile.clone());
        success.notice.clone()
    }

    pub fn logout(&mut self) -> Notice {
        self.session.sign_out();
        Notice::success(messages::LOGGED_OUT)
    }

    /// Replace the editable profile fields.
    pub fn save_profile(&mut self, name: &str, email: &str, company: &str) -> Notice {
        let mut profile = self.session.profile();
        profile.name = name.trim().to_string();
        profile.email = email.trim().to_string();
        profile.company = company.trim().to_string();
        self.session.sign_in(profile);
        Notice::success(messages::PROFILE_SAVED)
    }

    /// Claim the upload slot for a new batch.
    ///
    /// Returns `false`, leaving the running batch alone, if one is already
    /// in progress; the caller drops the new selection.
    pub fn begin_upload(&mut self) -> bool {
        if self.uploading {
            log::debug!("Upload batch already running");
            return false;
        }
        self.uploading = true;
        true
    }

    /// Release the slot once the batch completed or aborted.
    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Fold one upload event into the state.
    pub fn apply_upload_event(&mut self, event: UploadEvent) -> Option<Notice> {
        let notice = event.notice();
        if let UploadEvent::Uploaded(record) = event {
            self.registry.prepend(record);
        }
        notice
    }

    /// Delete by id. `None` if there was nothing to delete.
    pub fn delete_presentation(&mut self, id: &str) -> Option<Notice> {
        self.registry
            .remove(id)
            .map(|_| Notice::success(messages::PRESENTATION_DELETED))
    }

    /// Records uploaded during this page session, newest first.
    pub fn session_uploads(&self) -> Vec<PresentationRecord> {
        self.registry
            .iter()
            .filter(|r| r.local_url.is_some())
            .cloned()
            .collect()
    }
}
