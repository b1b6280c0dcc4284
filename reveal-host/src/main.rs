use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use reveal_host::{Cli, Config, run};
use reveal_persistence::{PersistentStore, StateRepository, connection::connect_and_migrate};

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::new();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }

    let db = match connect_and_migrate(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database '{}': {}", config.database_url, e);
            std::process::exit(1);
        }
    };
    let repository = StateRepository::with_key(db, &config.state_key);
    let mut store = PersistentStore::open(repository).await;

    match run(&mut store, cli.command).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to render output: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
    }

    info!("Done");
}
