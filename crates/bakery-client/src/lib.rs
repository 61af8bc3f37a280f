pub mod client;
pub mod controller;
pub mod http;
pub mod transport;

pub use client::{ImageClient, ImageReceipt, SubmitError};
pub use controller::{StatusMessage, SubmissionController};
pub use http::HttpError;
pub use transport::{HttpTransport, ReqwestTransport, SubmissionPayload};
