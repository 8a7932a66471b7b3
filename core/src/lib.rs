//! # Zipslides - presentation intake, simulated upload and registry
//!
//! The platform-independent half of Zipslides: everything the screens do
//! that is not drawing. There is no server behind any of it; uploads are
//! simulated with a delay and a made-up share link, logins accept anything
//! non-empty.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Selection  │────▶│   Intake    │────▶│   Upload    │────▶│  Registry   │
//! │ (FileHandle)│     │ (type/size) │     │ (delay+link)│     │ (newest 1st)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            └──────▶ Notice ◀───┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zipslides::{run_batch, AppConfig, AppState, CandidateFile, InstantClock};
//!
//! let mut state = AppState::new();
//! let files = vec![CandidateFile::new("deck.pdf", 1024, "application/pdf")];
//! let clock = InstantClock::new();
//! futures::executor::block_on(run_batch(&clock, &AppConfig::default(), files, |event| {
//!     state.apply_upload_event(event);
//! }));
//! assert_eq!(state.registry.len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types with their toast text
//! - [`config`] - Constants and runtime tunables
//! - [`models`] - Records, profile, routes
//! - [`file`] - The file-handle seam
//! - [`intake`] - Type and size validation
//! - [`upload`] - Simulated upload batches and share links
//! - [`registry`] - In-memory presentation list
//! - [`auth`] - Login/signup forms and their state machine
//! - [`state`] - Shared application state
//! - [`format`] - Size and date display
//! - [`clock`] - Delay and time source

// Core modules
pub mod config;
pub mod error;
pub mod models;
pub mod notice;

// Screens' logic
pub mod auth;
pub mod clock;
pub mod file;
pub mod intake;
pub mod registry;
pub mod state;
pub mod upload;

// Display
pub mod format;

// Native driver
#[cfg(feature = "cli")]
pub mod local;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{AppConfig, APP_NAME, MAX_FILE_SIZE, SHARE_BASE_URL};

pub use error::{
    AppError, AppResult, AuthError, AuthResult, IntakeError, IntakeResult, UploadError, UploadResult,
};

pub use models::{sample_presentations, PresentationKind, PresentationRecord, Route, UserProfile};

pub use notice::{messages, Notice, NoticeLevel};

pub use auth::{login, signup, AuthPhase, AuthSuccess, LoginForm, SignupForm};

pub use clock::{Clock, InstantClock};

#[cfg(feature = "cli")]
pub use clock::TokioClock;

pub use file::{CandidateFile, FileHandle};

pub use intake::{check_file, partition, IntakeReport};

pub use registry::PresentationRegistry;

pub use state::{AppState, Session};

pub use upload::{run_batch, share_link, share_token, BatchSummary, UploadEvent};

pub use format::{format_count, format_date, format_file_size};

#[cfg(feature = "cli")]
pub use local::LocalFile;
