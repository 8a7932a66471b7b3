//! Client file handles.
//!
//! The screens never read file contents: they only look at what the
//! platform declares about a file and ask it for a session-local URL.
//! [`FileHandle`] is that seam; the browser implements it for `web_sys::File`,
//! the CLI for files on disk.

use crate::error::{UploadError, UploadResult};

/// What intake and the upload simulation need from a selected file.
pub trait FileHandle {
    /// Name as declared by the client.
    fn name(&self) -> String;

    /// Size in bytes as reported by the client.
    fn size(&self) -> u64;

    /// Declared MIME type; may be empty.
    fn mime_type(&self) -> String;

    /// Session-local reference to the contents (an object URL in the
    /// browser). Called once per accepted file, after the delay.
    fn local_url(&self) -> UploadResult<String>;
}

/// A file described only by its declared metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    /// `None` makes [`FileHandle::local_url`] fail.
    pub local_url: Option<String>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        let name = name.into();
        let local_url = Some(format!("memory://{}", name));
        Self {
            name,
            size,
            mime_type: mime_type.into(),
            local_url,
        }
    }

    /// Same file, but creating its local reference fails.
    pub fn unreadable(mut self) -> Self {
        self.local_url = None;
        self
    }
}

impl FileHandle for CandidateFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn local_url(&self) -> UploadResult<String> {
        self.local_url
            .clone()
            .ok_or_else(|| UploadError::LocalReference {
                name: self.name.clone(),
                reason: "file is no longer readable".to_string(),
            })
    }
}
