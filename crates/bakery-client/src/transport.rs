use bakery_core::FileField;
use reqwest::multipart::{Form, Part};

use crate::http::HttpError;

/// The multipart fields of one submission, assembled from form state at
/// submit time. `user_requirements` is the only conditional field.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    pub project_file: FileField,
    pub tech_stack: String,
    pub executable_file: String,
    pub user_requirements: Option<FileField>,
}

/// Abstraction over the multipart POST for testability.
///
/// Production code uses [`ReqwestTransport`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait HttpTransport: Send + Sync {
    /// POST the payload as multipart form data and capture the response body.
    ///
    /// `Ok` means a 2xx response; any connect failure, non-2xx status, or
    /// unreadable body is an error.
    async fn post_form(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<String, HttpError>;
}

/// Real HTTP transport backed by reqwest.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<String, HttpError> {
        // Field order matches what the service has always received.
        let mut form = Form::new()
            .part("project_files", file_part(&payload.project_file))
            .text("tech_stack", payload.tech_stack.clone());

        if let Some(requirements) = &payload.user_requirements {
            form = form.part("user_requirements", file_part(requirements));
        }

        form = form.text("executable_file", payload.executable_file.clone());

        let response = self
            .http
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| HttpError::Connect {
                endpoint: endpoint.to_owned(),
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| HttpError::Body {
                detail: e.to_string(),
            })
    }
}

fn file_part(field: &FileField) -> Part {
    Part::bytes(field.bytes.clone()).file_name(field.file_name.clone())
}
