use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studygate::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studygate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => cli::commands::init(force).await,
        Commands::Courses {
            search,
            category,
            format,
        } => cli::commands::courses(search, category, format).await,
        Commands::Routes { format } => cli::commands::routes(format).await,
        Commands::Demo {
            email,
            password,
            course,
        } => cli::commands::demo(&email, &password, course).await,
        Commands::Shell => cli::shell::run_shell().await,
    }
}
