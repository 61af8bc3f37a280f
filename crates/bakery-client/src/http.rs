#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("could not reach image service at {endpoint}: {detail}")]
    Connect { endpoint: String, detail: String },

    #[error("image service returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("failed to read image service response: {detail}")]
    Body { detail: String },
}
