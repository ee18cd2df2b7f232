use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::telemetry::init_tracing;
use trivia_api::db::csv_io;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database URL, e.g. sqlite:trivia.db
    database_url: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories and questions as CSV into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let pool = establish_connection(&cli.database_url).await?;
    run_migrations(&pool).await?;
    match cli.command {
        Commands::Export { path } => csv_io::export_data(&pool, &path).await?,
        Commands::Import { path } => csv_io::import_data(&pool, &path).await?,
    }
    Ok(())
}
