//! UI Components for the Zipslides application.
//!
//! # Layout Components
//! - [`LandingNav`], [`UploadNav`], [`DashboardNav`] - Navigation bars
//! - [`Hero`], [`Features`], [`CallToAction`] - Landing page sections
//! - [`Footer`] - Page footer
//! - [`Loading`] - Full-screen loading indicator
//!
//! # Feature Components
//! - [`UploadZone`] - Drag & drop presentation upload
//! - [`PresentationCard`] - One presentation with share actions
//! - [`TextField`], [`PasswordField`] - Auth form inputs
//! - [`Toaster`] - Notification stack

mod field;
mod footer;
mod header;
mod hero;
mod loading;
mod presentation;
mod toaster;
mod upload;

pub use field::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use loading::*;
pub use presentation::*;
pub use toaster::*;
pub use upload::*;
