mod commands;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use client::{CredentialStore, LocalStore, RemoteStore};
use commands::Command;

#[derive(Parser, Debug)]
#[command(name = "credman", author, version, about = "Personal credential manager", long_about = None)]
struct Cli {
    /// Base URL of a credman API server. Without it the local JSON store
    /// is used.
    #[arg(long, global = true)]
    api: Option<String>,

    /// Path of the local credential store [default: credman/credentials.json
    /// under the user config directory]
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("credman").join("credentials.json"))
        .unwrap_or_else(|| PathBuf::from("credentials.json"))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let store: Box<dyn CredentialStore> = match &cli.api {
        Some(base_url) => Box::new(RemoteStore::new(base_url)),
        None => Box::new(LocalStore::new(cli.file.unwrap_or_else(default_store_path))),
    };

    if let Err(err) = commands::run(cli.command, store.as_ref()).await {
        commands::report(&err);
        std::process::exit(1);
    }
}
