//! Bookharvest main entry point
//!
//! Command-line interface for the catalog harvesting service.

use anyhow::Context;
use bookharvest::config::{load_config, validate, Config};
use bookharvest::crawler::Orchestrator;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Bookharvest: a catalog-site harvesting service
///
/// Serves an HTTP API that crawls a catalog listing page, fetches each
/// book's detail page and a bounded number of chapters, and returns the
/// aggregated result as JSON.
#[derive(Parser, Debug)]
#[command(name = "bookharvest")]
#[command(version)]
#[command(about = "A catalog-site harvesting service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the listen address from the config
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// Validate config and show effective settings without serving
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).context("Failed to load configuration")?
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            let config = Config::default();
            validate(&config).context("Invalid default configuration")?;
            config
        }
    };

    let addr: SocketAddr = match cli.addr {
        Some(addr) => addr,
        None => config
            .server
            .listen_addr
            .parse()
            .context("Invalid listen address in config")?,
    };

    if cli.dry_run {
        handle_dry_run(&config, addr);
        return Ok(());
    }

    let orchestrator =
        Arc::new(Orchestrator::new(&config).context("Failed to build orchestrator")?);

    bookharvest::server::serve(orchestrator, addr)
        .await
        .context("Server error")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bookharvest=info,warn"),
            1 => EnvFilter::new("bookharvest=debug,info"),
            2 => EnvFilter::new("bookharvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows effective settings
fn handle_dry_run(config: &Config, addr: SocketAddr) {
    println!("=== Bookharvest Dry Run ===\n");

    println!("Server:");
    println!("  Listen address: {}", addr);

    println!("\nCrawler:");
    println!("  Book gate capacity: {}", config.crawler.concurrent_books);
    println!(
        "  Chapter gate capacity: {}",
        config.crawler.concurrent_chapters
    );
    println!(
        "  Default chapters per book: {}",
        config.crawler.default_num_chapters
    );
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );

    println!("\nTarget site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Listing path: {}", config.site.listing_path);
    println!("  User agent: {}", config.site.user_agent);

    println!("\nSelectors:");
    println!("  listing-entry = {}", config.selectors.listing_entry);
    println!("  title-link = {}", config.selectors.title_link);
    println!("  author = {}", config.selectors.author);
    println!("  thumbnail = {}", config.selectors.thumbnail);
    println!("  intro = {}", config.selectors.intro);
    println!("  breadcrumb = {}", config.selectors.breadcrumb);
    println!("  chapter-link = {}", config.selectors.chapter_link);
    println!("  chapter-content = {}", config.selectors.chapter_content);

    println!("\n✓ Configuration is valid");
}
