//! Upload simulation.
//!
//! There is no server. An "upload" waits a fixed delay, asks the platform for
//! a session-local URL to the file, and invents a share link:
//!
//! ```text
//! selection ──▶ intake ──▶ sleep(delay) ──▶ local_url() ──▶ PresentationRecord
//!                  │                              │
//!                  ▼                              ▼
//!              Rejected                    Failed (abort batch)
//! ```
//!
//! Files are handled one at a time, in selection order. Progress is reported
//! through a sink closure as [`UploadEvent`]s so the caller can prepend to its
//! registry and toast between files.

use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::error::{IntakeError, UploadError, UploadResult};
use crate::file::FileHandle;
use crate::intake::check_file;
use crate::models::PresentationRecord;
use crate::notice::Notice;

// =============================================================================
// Share links
// =============================================================================

/// Random alphanumeric token from the thread-local CSPRNG.
pub fn share_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `<base>/share/<token>`.
pub fn share_link(base_url: &str, token: &str) -> String {
    format!("{}/share/{}", base_url.trim_end_matches('/'), token)
}

/// Fresh record id.
pub fn record_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Events
// =============================================================================

/// Progress of a batch, one per file outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// Intake refused the file; the batch goes on.
    Rejected(IntakeError),
    /// The file is accepted and its delay is starting.
    Started { name: String },
    /// The record is ready to be prepended.
    Uploaded(PresentationRecord),
    /// Unexpected failure; nothing after this runs.
    Failed(UploadError),
}

impl UploadEvent {
    /// Toast for this event, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            UploadEvent::Rejected(e) => Some(Notice::error(e.user_message())),
            UploadEvent::Started { .. } => None,
            UploadEvent::Uploaded(record) => {
                Some(Notice::success(format!("{} uploaded successfully!", record.name)))
            }
            UploadEvent::Failed(e) => Some(Notice::error(e.user_message())),
        }
    }
}

/// Counts for a finished batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub uploaded: usize,
    pub rejected: usize,
    /// Files never looked at because the batch aborted
    pub skipped: usize,
    pub failure: Option<UploadError>,
}

impl BatchSummary {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

// =============================================================================
// Simulation
// =============================================================================

/// Build the record for an accepted file once its delay is over.
pub fn synthesize_record<F, C>(file: &F, clock: &C, config: &AppConfig) -> UploadResult<PresentationRecord>
where
    F: FileHandle + ?Sized,
    C: Clock,
{
    let local_url = file.local_url()?;
    let token = share_token(config.share_token_len);

    Ok(PresentationRecord {
        id: record_id(),
        name: file.name(),
        size: file.size(),
        mime_type: file.mime_type(),
        share_link: share_link(&config.share_base_url, &token),
        local_url: Some(local_url),
        uploaded_at: clock.now(),
        views: None,
        downloads: None,
    })
}

/// Run one selection through intake and the simulated upload.
///
/// Every outcome goes to `sink` as it happens. Rejections never reach the
/// delay. The first [`UploadError`] stops the batch; records already emitted
/// stay with the caller.
pub async fn run_batch<C, F, S>(clock: &C, config: &AppConfig, files: Vec<F>, mut sink: S) -> BatchSummary
where
    C: Clock,
    F: FileHandle,
    S: FnMut(UploadEvent),
{
    let total = files.len();
    let mut summary = BatchSummary::default();
    log::info!("📤 Upload batch of {} file(s)", total);

    for (index, file) in files.into_iter().enumerate() {
        if let Err(rejection) = check_file(&file, config.max_file_size) {
            log::warn!("⚠️  {}", rejection);
            summary.rejected += 1;
            sink(UploadEvent::Rejected(rejection));
            continue;
        }

        let name = file.name();
        sink(UploadEvent::Started { name: name.clone() });
        clock.sleep(config.upload_delay).await;

        match synthesize_record(&file, clock, config) {
            Ok(record) => {
                log::info!("✅ {} -> {}", record.name, record.share_link);
                summary.uploaded += 1;
                sink(UploadEvent::Uploaded(record));
            }
            Err(e) => {
                log::error!("❌ {} failed: {}", name, e);
                summary.skipped = total - index - 1;
                summary.failure = Some(e.clone());
                sink(UploadEvent::Failed(e));
                break;
            }
        }
    }

    log::info!(
        "Batch done: {} uploaded, {} rejected, {} skipped",
        summary.uploaded,
        summary.rejected,
        summary.skipped
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantClock;
    use crate::file::CandidateFile;
    use crate::registry::PresentationRegistry;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::time::Duration;

    const PDF: &str = "application/pdf";
    const PPT: &str = "application/vnd.ms-powerpoint";

    fn run(
        clock: &InstantClock,
        files: Vec<CandidateFile>,
        registry: &mut PresentationRegistry,
    ) -> (BatchSummary, Vec<UploadEvent>) {
        let config = AppConfig::default();
        let mut events = Vec::new();
        let summary = block_on(run_batch(clock, &config, files, |event| {
            if let UploadEvent::Uploaded(record) = &event {
                registry.prepend(record.clone());
            }
            events.push(event);
        }));
        (summary, events)
    }

    #[test]
    fn test_share_token_alphabet_and_length() {
        let token = share_token(12);
        assert_eq!(token.len(), 12);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(share_token(0), "");
    }

    #[test]
    fn test_share_link_format() {
        assert_eq!(
            share_link("https://zipslides.com/", "abc"),
            "https://zipslides.com/share/abc"
        );
    }

    #[test]
    fn test_one_record_per_accepted_file() {
        let clock = InstantClock::new();
        let mut registry = PresentationRegistry::with_samples();
        let files = vec![
            CandidateFile::new("a.pdf", 100, PDF),
            CandidateFile::new("b.ppt", 200, PPT),
        ];

        let (summary, _) = run(&clock, files, &mut registry);

        assert_eq!(summary.uploaded, 2);
        assert!(summary.is_complete());
        assert_eq!(registry.len(), 4);
        // processed in order, each prepended: last file ends up first
        assert_eq!(registry.as_slice()[0].name, "b.ppt");
        assert_eq!(registry.as_slice()[1].name, "a.pdf");
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(2); 2]);
    }

    #[test]
    fn test_rejected_files_never_wait() {
        let clock = InstantClock::new();
        let mut registry = PresentationRegistry::new();
        let files = vec![
            CandidateFile::new("pic.png", 100, "image/png"),
            CandidateFile::new("big.pdf", 50 * 1024 * 1024 + 1, PDF),
            CandidateFile::new("ok.pdf", 100, PDF),
        ];

        let (summary, events) = run(&clock, files, &mut registry);

        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.uploaded, 1);
        assert_eq!(clock.sleeps().len(), 1);
        assert_eq!(registry.len(), 1);

        let notices: Vec<_> = events.iter().filter_map(|e| e.notice()).collect();
        assert_eq!(notices.len(), 3);
        assert_eq!(
            notices[0].message,
            "pic.png is not a valid file type. Please upload PPT or PDF files."
        );
        assert_eq!(notices[1].message, "big.pdf is too large. Maximum file size is 50MB.");
        assert_eq!(notices[2].message, "ok.pdf uploaded successfully!");
    }

    #[test]
    fn test_failure_aborts_rest_of_batch() {
        let clock = InstantClock::new();
        let mut registry = PresentationRegistry::new();
        let files = vec![
            CandidateFile::new("first.pdf", 1, PDF),
            CandidateFile::new("broken.pdf", 1, PDF).unreadable(),
            CandidateFile::new("never.pdf", 1, PDF),
            CandidateFile::new("never.png", 1, "image/png"),
        ];

        let (summary, events) = run(&clock, files, &mut registry);

        assert_eq!(summary.uploaded, 1);
        assert_eq!(summary.skipped, 2);
        assert!(matches!(summary.failure, Some(UploadError::LocalReference { .. })));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.as_slice()[0].name, "first.pdf");

        let last = events.last().and_then(|e| e.notice()).unwrap();
        assert!(last.is_error());
        assert_eq!(last.message, "Upload failed. Please try again.");
    }

    #[test]
    fn test_record_fields() {
        let at = chrono::Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let clock = InstantClock::frozen(at);
        let config = AppConfig::default().with_share_base_url("https://example.test");
        let file = CandidateFile::new("deck.pdf", 1536, PDF);

        let record = synthesize_record(&file, &clock, &config).unwrap();

        assert_eq!(record.name, "deck.pdf");
        assert_eq!(record.size, 1536);
        assert_eq!(record.mime_type, PDF);
        assert_eq!(record.uploaded_at, at);
        assert_eq!(record.local_url.as_deref(), Some("memory://deck.pdf"));
        assert!(record.share_link.starts_with("https://example.test/share/"));
        assert_eq!(record.share_token().map(str::len), Some(config.share_token_len));
        assert!(record.views.is_none());
        assert!(Uuid::parse_str(&record.id).is_ok());
    }

    #[test]
    fn test_same_name_uploads_get_distinct_ids() {
        let clock = InstantClock::new();
        let mut registry = PresentationRegistry::new();
        let files = vec![
            CandidateFile::new("deck.pdf", 1, PDF),
            CandidateFile::new("deck.pdf", 1, PDF),
        ];

        run(&clock, files, &mut registry);

        let records = registry.as_slice();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);
    }
}
