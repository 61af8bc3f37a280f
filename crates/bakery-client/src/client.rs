use serde::Deserialize;

use crate::http::HttpError;
use crate::transport::{HttpTransport, ReqwestTransport, SubmissionPayload};

/// Image service client, parameterized over the transport for testability.
pub struct ImageClient<T: HttpTransport = ReqwestTransport> {
    transport: T,
    endpoint: String,
}

impl ImageClient<ReqwestTransport> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            transport: ReqwestTransport::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl<T: HttpTransport> ImageClient<T> {
    pub fn with_transport(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue exactly one image-creation request. Best effort: no retry,
    /// no timeout, no cancellation.
    pub async fn create_image(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ImageReceipt, SubmitError> {
        let body = self
            .transport
            .post_form(&self.endpoint, payload)
            .await
            .map_err(|e| SubmitError::Transport { source: e })?;

        serde_json::from_str(&body).map_err(|e| SubmitError::MalformedResponse {
            detail: e.to_string(),
        })
    }
}

/// Success payload returned by the image service.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageReceipt {
    /// Where the service stored the built artifact.
    pub image_path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("image creation request failed")]
    Transport { source: HttpError },

    #[error("image service response was not understood: {detail}")]
    MalformedResponse { detail: String },
}
