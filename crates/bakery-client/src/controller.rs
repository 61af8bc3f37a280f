use bakery_core::{SubmissionForm, SubmissionState};
use std::fmt;

use crate::client::{ImageClient, SubmitError};
use crate::transport::{HttpTransport, ReqwestTransport, SubmissionPayload};

/// Shown when submit is pressed with no project file selected.
pub(crate) const MISSING_PROJECT_NOTICE: &str = "Please select a project file first.";

/// Shown on any transport, server, or response-parsing failure.
/// The service does not distinguish these cases, and neither do we.
pub(crate) const FAILURE_MESSAGE: &str = "Failed to create the Docker image.";

/// User-visible result of an interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Blocking notice: input invalid, nothing was sent.
    Validation(String),
    /// The image was built; carries the location the service reported.
    Success(String),
    /// Generic failure, one message for every failure mode.
    Failure(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Validation(s) | StatusMessage::Success(s) | StatusMessage::Failure(s) => {
                s
            }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Owns the form state and drives one submission attempt end to end:
/// validate, assemble the multipart payload, issue the single request,
/// surface the outcome.
///
/// State machine: `idle -> in-flight -> {succeeded, failed}`, back to
/// in-flight on resubmit. Every attempt leaves in-flight exactly once.
pub struct SubmissionController<T: HttpTransport = ReqwestTransport> {
    form: SubmissionForm,
    state: SubmissionState,
    status: Option<StatusMessage>,
    client: ImageClient<T>,
}

impl SubmissionController<ReqwestTransport> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(ImageClient::new(endpoint))
    }
}

impl<T: HttpTransport> SubmissionController<T> {
    pub fn with_client(client: ImageClient<T>) -> Self {
        Self::with_form(client, SubmissionForm::new())
    }

    pub fn with_form(client: ImageClient<T>, form: SubmissionForm) -> Self {
        Self {
            form,
            state: SubmissionState::Idle,
            status: None,
            client,
        }
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    /// User input events mutate the form through here; the values are
    /// read back only at the moment of submit.
    pub fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// True while a submission is in flight. The rendering layer uses
    /// this to show the loading indicator and disable the trigger.
    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::InFlight
    }

    /// Run one submission attempt against the current form values.
    ///
    /// With no project file selected this is a local validation failure:
    /// a blocking notice is surfaced and no request is issued. Otherwise
    /// exactly one request goes out, and the state ends at either
    /// [`SubmissionState::Succeeded`] or [`SubmissionState::Failed`].
    pub async fn submit(&mut self) -> SubmissionState {
        let Some(project) = self.form.project_file().cloned() else {
            self.status = Some(StatusMessage::Validation(MISSING_PROJECT_NOTICE.to_owned()));
            return self.state;
        };

        let payload = SubmissionPayload {
            project_file: project,
            tech_stack: self.form.tech_stack().as_tag().to_owned(),
            executable_file: self.form.executable_file().to_owned(),
            user_requirements: self.form.requirements_file().cloned(),
        };

        tracing::debug!(
            project = %payload.project_file.file_name,
            tech_stack = %payload.tech_stack,
            executable = %payload.executable_file,
            requirements = payload.user_requirements.is_some(),
            "submitting image creation request"
        );

        self.state = SubmissionState::InFlight;
        self.status = None;

        match self.client.create_image(&payload).await {
            Ok(receipt) => {
                self.state = SubmissionState::Succeeded;
                self.status = Some(StatusMessage::Success(format!(
                    "Docker image created! Stored at: {}",
                    receipt.image_path
                )));
            }
            Err(err) => {
                log_failure(&err);
                self.state = SubmissionState::Failed;
                self.status = Some(StatusMessage::Failure(FAILURE_MESSAGE.to_owned()));
            }
        }

        self.state
    }
}

fn log_failure(err: &SubmitError) {
    match err {
        SubmitError::Transport { source } => {
            tracing::debug!(error = %source, "image creation request failed");
        }
        SubmitError::MalformedResponse { detail } => {
            tracing::debug!(detail = %detail, "image service response was not understood");
        }
    }
}
