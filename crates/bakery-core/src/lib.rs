//! Core types and configuration for bakery.
//!
//! This crate defines the `bakery.toml` schema ([`BakeryConfig`]), the
//! closed set of supported runtime tags ([`TechStack`]), the mutable
//! submission form state ([`SubmissionForm`]), and shared error types.

pub mod config;
pub mod error;
pub mod form;
pub mod stack;

pub use config::{BakeryConfig, DefaultsConfig, ServiceConfig};
pub use error::{Error, Result};
pub use form::{FileField, SubmissionForm, SubmissionState};
pub use stack::TechStack;
