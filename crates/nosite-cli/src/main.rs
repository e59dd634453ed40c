mod export;
mod render;
mod saved;
mod search;

use clap::{Parser, Subcommand};
use nosite_core::Category;
use tracing_subscriber::EnvFilter;

use crate::search::{run_search_command, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "nosite")]
#[command(about = "Find local businesses that have no website")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search around a location for businesses without a website
    Search(SearchArgs),
    /// List the categories a search can probe
    Categories,
    /// Show the inputs of the last saved search
    Last,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_level = std::env::var("NOSITE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}

/// Dispatch a parsed command. Configuration is only loaded by the commands
/// that read it, so `categories` works with a broken or empty environment.
async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Search(args)) => {
            let config = nosite_core::load_app_config()?;
            run_search_command(&config, args).await?;
        }
        Some(Commands::Categories) => print!("{}", category_listing()),
        Some(Commands::Last) => {
            let config = nosite_core::load_app_config()?;
            match saved::load(&config.state_path)? {
                Some(last) => {
                    let categories: Vec<&str> =
                        last.categories.iter().map(|c| c.as_str()).collect();
                    println!("location:   {}", last.location);
                    println!("radius:     {} km", last.radius_km);
                    println!("categories: {}", categories.join(","));
                    println!("saved at:   {}", last.saved_at.format("%Y-%m-%d %H:%M UTC"));
                }
                None => println!("no saved search; run `nosite search LOCATION` first"),
            }
        }
        None => println!("nosite: run `nosite --help` for usage"),
    }

    Ok(())
}

fn category_listing() -> String {
    Category::ALL
        .iter()
        .map(|category| format!("{category}\n"))
        .collect()
}
