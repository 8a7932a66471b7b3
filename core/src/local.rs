//! Files on disk, for the command-line driver.
//!
//! A file's declared type comes from its extension, the same mapping the
//! browser picker advertises; anything else is declared
//! `application/octet-stream` and will be refused by intake.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{UploadError, UploadResult};
use crate::file::FileHandle;
use crate::models::PresentationKind;

/// Fallback type for unknown extensions.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// A file picked from the local file system.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    size: u64,
    mime_type: String,
}

impl LocalFile {
    /// Stat `path` and derive its declared type.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }

        let mime_type = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(PresentationKind::from_file_name)
            .map(|k| k.mime_type())
            .unwrap_or(UNKNOWN_MIME)
            .to_string();

        Ok(Self {
            path,
            size: metadata.len(),
            mime_type,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn local_url(&self) -> UploadResult<String> {
        let absolute = fs::canonicalize(&self.path).map_err(|e| UploadError::LocalReference {
            name: self.name(),
            reason: e.to_string(),
        })?;
        Ok(format!("file://{}", absolute.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_declared_type_from_extension() {
        let dir = tempdir().unwrap();
        let deck = dir.path().join("Deck.PPTX");
        fs::write(&deck, b"not really a pptx").unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, b"hello").unwrap();

        let deck = LocalFile::open(&deck).unwrap();
        assert_eq!(deck.name(), "Deck.PPTX");
        assert_eq!(deck.size(), 17);
        assert_eq!(deck.mime_type(), PresentationKind::Pptx.mime_type());

        let notes = LocalFile::open(&notes).unwrap();
        assert_eq!(notes.mime_type(), UNKNOWN_MIME);
    }

    #[test]
    fn test_local_url_is_file_scheme() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.pdf");
        fs::write(&path, b"%PDF").unwrap();

        let file = LocalFile::open(&path).unwrap();
        let url = file.local_url().unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("a.pdf"));
    }

    #[test]
    fn test_deleted_file_fails_local_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.pdf");
        fs::write(&path, b"%PDF").unwrap();
        let file = LocalFile::open(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(matches!(file.local_url(), Err(UploadError::LocalReference { .. })));
    }

    #[test]
    fn test_directories_are_refused() {
        let dir = tempdir().unwrap();
        assert!(LocalFile::open(dir.path()).is_err());
    }
}
