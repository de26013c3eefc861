use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use katakana_quiz::{Config, QueryService, WordStore, loader, web};

#[derive(Parser)]
#[command(name = "katakana-quiz", about = "Katakana vocabulary quiz server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the quiz web server
    Serve,
    /// Load the word fixture file into the database
    Load {
        /// Fixture file to load instead of the configured one
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let store = WordStore::new(&config.database).await?;

    match cli.command {
        Command::Serve => {
            let service = QueryService::new(store);
            web::serve(service, config.listen_addr()?).await
        }
        Command::Load { file } => {
            let path = file.unwrap_or_else(|| PathBuf::from(&config.loader.words_file));
            let report = loader::load_file(&store, &path).await?;

            println!(
                "📚 Processed {} entries: {} created, {} updated",
                report.total, report.created, report.updated
            );
            for failure in &report.failures {
                println!(
                    "  ⚠️  entry {} ({}): {}",
                    failure.index,
                    failure.katakana.as_deref().unwrap_or("?"),
                    failure.error
                );
            }
            if !report.failures.is_empty() {
                println!("❌ {} entries were not loaded", report.failures.len());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
