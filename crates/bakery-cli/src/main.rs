mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bakery", about = "Build Docker images for your project via the image service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a project to the image-creation service
    Submit {
        /// Project file to upload
        project: PathBuf,
        /// Target runtime tag (e.g. python:3.8, node:18)
        #[arg(long)]
        stack: Option<String>,
        /// Dependency manifest to upload alongside the project
        #[arg(long)]
        requirements: Option<PathBuf>,
        /// Executable file name inside the project
        #[arg(long)]
        executable: Option<String>,
        /// Override the image service endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// List supported tech stack tags
    Stacks,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            project,
            stack,
            requirements,
            executable,
            endpoint,
        } => {
            commands::submit(
                &project,
                stack.as_deref(),
                requirements.as_deref(),
                executable,
                endpoint,
            )
            .await?
        }
        Commands::Stacks => commands::stacks(),
    }

    Ok(())
}
