use std::path::Path;

use crate::TechStack;

/// An in-memory file reference: the original file name plus its bytes.
/// Held only for the lifetime of the form, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileField {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileField {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk into a form field.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| crate::Error::NoFileName {
                path: path.to_path_buf(),
            })?
            .to_owned();

        let bytes = std::fs::read(path).map_err(|e| crate::Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self { file_name, bytes })
    }
}

/// Where a submission attempt currently stands.
///
/// `idle -> in-flight -> {succeeded, failed}`, back to in-flight on
/// resubmit. The form is reusable indefinitely within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Mutable form state with a single owner. Mutated only by the
/// user-input setters below; read by the submission controller at the
/// moment of submit, so the latest edits always win.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    project_file: Option<FileField>,
    tech_stack: TechStack,
    requirements_file: Option<FileField>,
    executable_file: String,
}

impl SubmissionForm {
    /// A freshly opened form: no files, default stack, `app.py`.
    pub fn new() -> Self {
        Self {
            project_file: None,
            tech_stack: TechStack::default(),
            requirements_file: None,
            executable_file: "app.py".to_owned(),
        }
    }

    /// A fresh form with configured defaults instead of the built-ins.
    pub fn with_defaults(tech_stack: TechStack, executable_file: impl Into<String>) -> Self {
        Self {
            project_file: None,
            tech_stack,
            requirements_file: None,
            executable_file: executable_file.into(),
        }
    }

    pub fn select_project(&mut self, file: FileField) {
        self.project_file = Some(file);
    }

    pub fn select_requirements(&mut self, file: FileField) {
        self.requirements_file = Some(file);
    }

    pub fn set_tech_stack(&mut self, stack: TechStack) {
        self.tech_stack = stack;
    }

    pub fn set_executable_file(&mut self, name: impl Into<String>) {
        self.executable_file = name.into();
    }

    pub fn project_file(&self) -> Option<&FileField> {
        self.project_file.as_ref()
    }

    pub fn requirements_file(&self) -> Option<&FileField> {
        self.requirements_file.as_ref()
    }

    pub fn tech_stack(&self) -> TechStack {
        self.tech_stack
    }

    pub fn executable_file(&self) -> &str {
        &self.executable_file
    }
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::new()
    }
}
