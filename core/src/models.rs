//! Domain models shared by the screens and the CLI.
//!
//! # Types
//!
//! - [`PresentationKind`] - the three accepted presentation formats
//! - [`PresentationRecord`] - one uploaded (or seeded) presentation
//! - [`UserProfile`] - the mock identity shown on the dashboard
//! - [`Route`] - the five screens

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Presentation kinds
// =============================================================================

/// Accepted presentation formats, keyed by declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationKind {
    Pdf,
    Ppt,
    Pptx,
}

impl PresentationKind {
    /// All accepted kinds, in the order the picker lists them.
    pub const ALL: [PresentationKind; 3] = [
        PresentationKind::Pdf,
        PresentationKind::Ppt,
        PresentationKind::Pptx,
    ];

    /// Declared MIME type for this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            PresentationKind::Pdf => "application/pdf",
            PresentationKind::Ppt => "application/vnd.ms-powerpoint",
            PresentationKind::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }

    /// File extension the picker advertises, with the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            PresentationKind::Pdf => ".pdf",
            PresentationKind::Ppt => ".ppt",
            PresentationKind::Pptx => ".pptx",
        }
    }

    /// Exact match on the declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.mime_type() == mime)
    }

    /// Kind implied by a file name's extension (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        // ".pptx" must win over ".ppt"
        [PresentationKind::Pptx, PresentationKind::Ppt, PresentationKind::Pdf]
            .into_iter()
            .find(|k| lower.ends_with(k.extension()))
    }

    /// Value for an `<input type="file" accept=...>` attribute.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .flat_map(|k| [k.extension(), k.mime_type()])
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for PresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PresentationKind::Pdf => "PDF",
            PresentationKind::Ppt => "PPT",
            PresentationKind::Pptx => "PPTX",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Presentation record
// =============================================================================

/// One presentation in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationRecord {
    /// Client-generated id
    pub id: String,
    /// File name as declared by the client
    pub name: String,
    /// Byte count reported by the file handle
    pub size: u64,
    /// Declared MIME type
    pub mime_type: String,
    /// `<base>/share/<token>`; nothing serves it
    pub share_link: String,
    /// Session-local reference to the bytes (object URL); seeds have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_url: Option<String>,
    /// Client clock at simulation completion
    pub uploaded_at: DateTime<Utc>,
    /// Static view counter, seeds only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    /// Static download counter, seeds only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u64>,
}

impl PresentationRecord {
    /// Format of this record, if its MIME type is a known one.
    pub fn kind(&self) -> Option<PresentationKind> {
        PresentationKind::from_mime(&self.mime_type)
    }

    /// Token part of the share link.
    pub fn share_token(&self) -> Option<&str> {
        self.share_link
            .rsplit_once("/share/")
            .map(|(_, token)| token)
    }
}

/// The two sample records the dashboard starts with.
pub fn sample_presentations() -> Vec<PresentationRecord> {
    vec![
        sample(
            "1",
            "Q4 Business Review.pptx",
            2.5,
            PresentationKind::Pptx,
            "abc123",
            (2024, 1, 15),
            45,
            12,
        ),
        sample(
            "2",
            "Marketing Strategy.pdf",
            1.8,
            PresentationKind::Pdf,
            "def456",
            (2024, 1, 10),
            23,
            8,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    mebibytes: f64,
    kind: PresentationKind,
    token: &str,
    (year, month, day): (i32, u32, u32),
    views: u64,
    downloads: u64,
) -> PresentationRecord {
    let uploaded_at = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default();

    PresentationRecord {
        id: id.to_string(),
        name: name.to_string(),
        size: (mebibytes * 1024.0 * 1024.0) as u64,
        mime_type: kind.mime_type().to_string(),
        share_link: format!("{}/share/{}", crate::config::SHARE_BASE_URL, token),
        local_url: None,
        uploaded_at,
        views: Some(views),
        downloads: Some(downloads),
    }
}

// =============================================================================
// User profile
// =============================================================================

/// The nominal identity displayed on the dashboard.
///
/// Never checked against anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub company: String,
    /// e.g. "January 2024"
    pub member_since: String,
}

impl UserProfile {
    /// The hard-coded demo account.
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            company: "Acme Corporation".to_string(),
            member_since: "January 2024".to_string(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::demo()
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Upload,
}

impl Route {
    /// Router path.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Upload => "/upload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_allowlist() {
        assert_eq!(
            PresentationKind::from_mime("application/pdf"),
            Some(PresentationKind::Pdf)
        );
        assert_eq!(
            PresentationKind::from_mime("application/vnd.ms-powerpoint"),
            Some(PresentationKind::Ppt)
        );
        assert_eq!(PresentationKind::from_mime("image/png"), None);
        // no case folding on declared types
        assert_eq!(PresentationKind::from_mime("APPLICATION/PDF"), None);
    }

    #[test]
    fn test_kind_from_file_name() {
        assert_eq!(
            PresentationKind::from_file_name("Deck.PPTX"),
            Some(PresentationKind::Pptx)
        );
        assert_eq!(
            PresentationKind::from_file_name("old.ppt"),
            Some(PresentationKind::Ppt)
        );
        assert_eq!(
            PresentationKind::from_file_name("report.pdf"),
            Some(PresentationKind::Pdf)
        );
        assert_eq!(PresentationKind::from_file_name("notes.txt"), None);
    }

    #[test]
    fn test_accept_attribute_lists_everything() {
        let accept = PresentationKind::accept_attribute();
        for kind in PresentationKind::ALL {
            assert!(accept.contains(kind.extension()));
            assert!(accept.contains(kind.mime_type()));
        }
    }

    #[test]
    fn test_samples() {
        let samples = sample_presentations();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].size, 2_621_440);
        assert_eq!(samples[0].share_token(), Some("abc123"));
        assert_eq!(samples[0].kind(), Some(PresentationKind::Pptx));
        assert_eq!(samples[1].uploaded_at.format("%Y-%m-%d").to_string(), "2024-01-10");
        assert_eq!(samples[1].views, Some(23));
    }

    #[test]
    fn test_record_json_is_camel_case() {
        let json = serde_json::to_value(&sample_presentations()[0]).unwrap();
        assert!(json.get("shareLink").is_some());
        assert!(json.get("mimeType").is_some());
        assert!(json.get("localUrl").is_none());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }
}
