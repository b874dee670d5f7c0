//! Storefront terminal host
//!
//! Drives the catalog coordinator from stdin and re-renders the view on every
//! state change.
//!
//! # Usage
//!
//! ```bash
//! STOREFRONT_API_URL=http://localhost:8000 storefront
//! > shoe                 # search term
//! > /category Footwear   # filter by category
//! > /all                 # clear the category filter
//! > /refresh             # refetch now
//! > /quit
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use storefront::render::render_view;
use storefront::{CatalogConfig, CatalogCoordinator, Presenter};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Browse and search the product catalog from a terminal")]
struct Cli {
    /// Backend base URL (overrides STOREFRONT_API_URL from .env)
    #[arg(long, env = "STOREFRONT_API_URL")]
    api_url: Option<String>,

    /// Quiet period before a query change is sent, in milliseconds
    #[arg(long, env = "STOREFRONT_DEBOUNCE_MS")]
    debounce_ms: Option<u64>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Category(String),
    AllCategories,
    Refresh,
    Quit,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.split_once(' ').unwrap_or((line, "")) {
        ("/quit" | "/exit", _) => Command::Quit,
        ("/refresh", _) => Command::Refresh,
        ("/all", _) => Command::AllCategories,
        ("/category", name) if name.trim().is_empty() => Command::AllCategories,
        ("/category", name) => Command::Category(name.trim().to_string()),
        _ => Command::Search(line.to_string()),
    }
}

fn init_tracing() {
    // Logs go to stderr so stdout only carries the rendered view
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storefront=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::from_env().context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url)?;
    }
    if let Some(ms) = cli.debounce_ms {
        config = config.with_debounce(Duration::from_millis(ms));
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(api = %config.api_base_url, debounce_ms = config.debounce.as_millis() as u64, "Starting storefront");

    let coordinator =
        CatalogCoordinator::with_http(&config).context("Failed to create catalog client")?;

    // Render loop
    let mut updates = coordinator.subscribe();
    let renderer = tokio::spawn(async move {
        let mut presenter = Presenter::new();
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            let view = presenter.present(&snapshot);
            println!("{}", "-".repeat(60));
            print!("{}", render_view(&view));
        }
    });

    let startup = coordinator.clone();
    tokio::spawn(async move { startup.initialize().await });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_command(&line) {
            Command::Search(term) => coordinator.set_term(term),
            Command::Category(name) => coordinator.set_category(name),
            Command::AllCategories => coordinator.clear_category(),
            Command::Refresh => {
                let refresh = coordinator.clone();
                tokio::spawn(async move { refresh.refresh().await });
            }
            Command::Quit => break,
        }
    }

    coordinator.cancel_pending();
    renderer.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("shoe"), Command::Search("shoe".into()));
        assert_eq!(parse_command("red shoe"), Command::Search("red shoe".into()));
        assert_eq!(parse_command(""), Command::Search(String::new()));
        assert_eq!(
            parse_command("/category Home Goods"),
            Command::Category("Home Goods".into())
        );
        assert_eq!(parse_command("/category"), Command::AllCategories);
        assert_eq!(parse_command("/all"), Command::AllCategories);
        assert_eq!(parse_command("/refresh"), Command::Refresh);
        assert_eq!(parse_command(" /quit "), Command::Quit);
    }
}
