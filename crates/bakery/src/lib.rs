//! Submit a project to a remote Docker-image-creation service.
//!
//! This is the unified facade crate that re-exports the Bakery sub-crates.
//! Use feature flags to control which components are included.
//!
//! # Feature flags
//!
//! | Feature | Default | Crate | Description |
//! |---------|---------|-------|-------------|
//! | `core` | yes | `bakery-core` | Configuration, form state, and shared types |
//! | `client` | yes | `bakery-client` | Multipart submission client and controller |
//!
//! # Quick start
//!
//! ```rust,no_run
//! use bakery::{FileField, SubmissionController, SubmissionState};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller =
//!     SubmissionController::new("http://127.0.0.1:8000/create_docker_image/");
//! controller
//!     .form_mut()
//!     .select_project(FileField::from_path("project.zip".as_ref())?);
//!
//! if controller.submit().await == SubmissionState::Succeeded {
//!     println!("{}", controller.status().map(|s| s.text()).unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

// Core types flattened into the root namespace for convenience.
#[cfg(feature = "core")]
pub use bakery_core::*;

#[cfg(feature = "client")]
pub use bakery_client::{
    HttpError, HttpTransport, ImageClient, ImageReceipt, ReqwestTransport, StatusMessage,
    SubmissionController, SubmissionPayload, SubmitError,
};

/// Submission client and controller, as a module.
///
/// **Requires** the `client` feature flag (enabled by default).
#[cfg(feature = "client")]
pub mod client {
    pub use bakery_client::*;
}
