//! One component per route.
//!
//! - [`LandingPage`] - `/`
//! - [`LoginPage`], [`SignupPage`] - `/login`, `/signup`
//! - [`DashboardPage`] - `/dashboard`
//! - [`UploadPage`] - `/upload`

mod auth;
mod dashboard;
mod landing;
mod upload;

pub use auth::{LoginPage, SignupPage};
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use upload::UploadPage;
