//! File intake and validation.
//!
//! Each candidate is judged on its own, from declared metadata only:
//!
//! 1. declared MIME type must be one of the [`PresentationKind`] types
//! 2. declared size must not exceed the ceiling (equal is fine)
//!
//! A renamed file with a matching declared type passes; nothing looks at the
//! bytes.

use crate::error::{IntakeError, IntakeResult};
use crate::file::FileHandle;
use crate::models::PresentationKind;

/// Validate one file against the allowlist and `max_size`.
///
/// The type check runs first, so a file failing both reports
/// [`IntakeError::InvalidFileType`].
pub fn check_file<F: FileHandle + ?Sized>(file: &F, max_size: u64) -> IntakeResult<PresentationKind> {
    let mime_type = file.mime_type();
    let kind = PresentationKind::from_mime(&mime_type).ok_or_else(|| {
        IntakeError::InvalidFileType {
            name: file.name(),
            mime_type: mime_type.clone(),
        }
    })?;

    let size = file.size();
    if size > max_size {
        return Err(IntakeError::FileTooLarge {
            name: file.name(),
            size,
            limit: max_size,
        });
    }

    Ok(kind)
}

/// Outcome of validating a whole selection without uploading anything.
#[derive(Debug)]
pub struct IntakeReport<F> {
    /// Accepted files with their kind, in input order
    pub accepted: Vec<(F, PresentationKind)>,
    /// Rejections, in input order
    pub rejected: Vec<IntakeError>,
}

impl<F> IntakeReport<F> {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Split a selection into accepted and rejected files.
pub fn partition<F: FileHandle>(files: Vec<F>, max_size: u64) -> IntakeReport<F> {
    let mut report = IntakeReport {
        accepted: Vec::new(),
        rejected: Vec::new(),
    };

    for file in files {
        match check_file(&file, max_size) {
            Ok(kind) => report.accepted.push((file, kind)),
            Err(e) => {
                log::debug!("Rejected {}", e);
                report.rejected.push(e);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;
    use crate::file::CandidateFile;

    const PDF: &str = "application/pdf";
    const PPTX: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";

    #[test]
    fn test_accepts_presentations() {
        let pdf = CandidateFile::new("a.pdf", 10, PDF);
        assert_eq!(check_file(&pdf, MAX_FILE_SIZE), Ok(PresentationKind::Pdf));

        let pptx = CandidateFile::new("b.pptx", 10, PPTX);
        assert_eq!(check_file(&pptx, MAX_FILE_SIZE), Ok(PresentationKind::Pptx));
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["image/png", "text/plain", "", "application/zip"] {
            let file = CandidateFile::new("x", 10, mime);
            assert!(matches!(
                check_file(&file, MAX_FILE_SIZE),
                Err(IntakeError::InvalidFileType { .. })
            ));
        }
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let at_limit = CandidateFile::new("a.pdf", MAX_FILE_SIZE, PDF);
        assert!(check_file(&at_limit, MAX_FILE_SIZE).is_ok());

        let over = CandidateFile::new("a.pdf", MAX_FILE_SIZE + 1, PDF);
        assert_eq!(
            check_file(&over, MAX_FILE_SIZE),
            Err(IntakeError::FileTooLarge {
                name: "a.pdf".into(),
                size: MAX_FILE_SIZE + 1,
                limit: MAX_FILE_SIZE,
            })
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = CandidateFile::new("movie.mp4", MAX_FILE_SIZE * 3, "video/mp4");
        assert!(matches!(
            check_file(&file, MAX_FILE_SIZE),
            Err(IntakeError::InvalidFileType { .. })
        ));
    }

    #[test]
    fn test_declared_type_is_trusted() {
        // renamed file: name says txt, declared type says pdf
        let file = CandidateFile::new("notes.txt", 100, PDF);
        assert_eq!(check_file(&file, MAX_FILE_SIZE), Ok(PresentationKind::Pdf));
    }

    #[test]
    fn test_partition_keeps_order() {
        let report = partition(
            vec![
                CandidateFile::new("1.pdf", 1, PDF),
                CandidateFile::new("2.png", 1, "image/png"),
                CandidateFile::new("3.pptx", 1, PPTX),
                CandidateFile::new("4.pdf", MAX_FILE_SIZE + 1, PDF),
            ],
            MAX_FILE_SIZE,
        );

        let names: Vec<_> = report.accepted.iter().map(|(f, _)| f.name.as_str()).collect();
        assert_eq!(names, ["1.pdf", "3.pptx"]);
        assert_eq!(report.rejected_count(), 2);
        assert_eq!(report.rejected[0].file_name(), "2.png");
        assert_eq!(report.rejected[1].file_name(), "4.pdf");
    }
}
