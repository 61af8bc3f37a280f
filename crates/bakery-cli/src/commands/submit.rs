use bakery_client::{ImageClient, SubmissionController};
use bakery_core::{BakeryConfig, FileField, SubmissionForm, SubmissionState, TechStack};
use std::path::{Path, PathBuf};

/// Run one submission against the image service.
pub async fn submit(
    project: &Path,
    stack: Option<&str>,
    requirements: Option<&Path>,
    executable: Option<String>,
    endpoint: Option<String>,
) -> anyhow::Result<()> {
    let config = BakeryConfig::load(&PathBuf::from("."))?;

    // Precedence: CLI flag, then BAKERY_ENDPOINT, then bakery.toml.
    let endpoint = endpoint
        .or_else(|| std::env::var("BAKERY_ENDPOINT").ok())
        .unwrap_or(config.service.endpoint);

    let default_stack: TechStack = config.defaults.tech_stack.parse()?;
    let mut form = SubmissionForm::with_defaults(default_stack, config.defaults.executable_file);

    form.select_project(FileField::from_path(project)?);
    if let Some(tag) = stack {
        form.set_tech_stack(tag.parse::<TechStack>()?);
    }
    if let Some(path) = requirements {
        form.select_requirements(FileField::from_path(path)?);
    }
    if let Some(name) = executable {
        form.set_executable_file(name);
    }

    let mut controller = SubmissionController::with_form(ImageClient::new(endpoint), form);

    println!("Submitting {} to the image service...", project.display());
    let state = controller.submit().await;

    if let Some(status) = controller.status() {
        println!();
        println!("{status}");
    }

    if state != SubmissionState::Succeeded {
        anyhow::bail!("image creation did not succeed");
    }

    Ok(())
}
