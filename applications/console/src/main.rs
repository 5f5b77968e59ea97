/// Code-First Demo - schema migration and seeding on startup
use clap::{Parser, Subcommand};
use codefirst::{AppConfig, DEFAULT_CONNECTION, DEFAULT_LOG_FILTER};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "codefirst")]
#[command(about = "Code-first schema migration and seeding demo", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./appsettings.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Connection string profile to use
    #[arg(long, global = true, default_value = DEFAULT_CONNECTION)]
    connection: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Default)]
enum Commands {
    /// Migrate, seed an empty user table and print all users (default)
    #[default]
    Run,
    /// Apply pending migrations and exit
    Migrate,
    /// List migrations and whether each is applied
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or_default() {
        Commands::Run => {
            codefirst::run(&config, &cli.connection, &mut stdout).await?;
        }
        Commands::Migrate => {
            codefirst::migrate(&config, &cli.connection, &mut stdout).await?;
        }
        Commands::Status => {
            codefirst::status(&config, &cli.connection, &mut stdout).await?;
        }
    }

    Ok(())
}
