//! User Store - database maintenance commands.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_store_lib::config::UserStoreConfig;

#[derive(Parser)]
#[command(name = "user-store")]
#[command(about = "User account persistence")]
struct Cli {
    /// Database URL (overrides USER_STORE_DATABASE_URL)
    #[arg(long, env = "USER_STORE_DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the users table and indexes if missing
    Schema,
    /// Check database connectivity
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = UserStoreConfig::from_env();
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    match cli.command {
        Commands::Schema => user_store_lib::ensure_schema(&config).await?,
        Commands::Ping => user_store_lib::ping(&config).await?,
    }

    Ok(())
}
