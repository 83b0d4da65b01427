//! Operator CLI for the link resolver.
//!
//! Runs the same resolver the server uses, so an operator can check what a
//! key or URL resolves to and whether storage and cache are reachable.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a short key (cache first, then storage)
//! cargo run --bin admin -- resolve key abc123
//!
//! # Find the mapping for a destination URL (storage only)
//! cargo run --bin admin -- resolve url https://example.com/page
//!
//! # Check connectivity
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- cache check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`link_resolver::config`].

use link_resolver::config::{self, Config, mask_connection_string};
use link_resolver::domain::entities::Resolution;
use link_resolver::infrastructure::persistence::PgMappingRepository;
use link_resolver::server::{build_cache, build_resolver, connect_database};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting the link resolver.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a key or destination URL
    Resolve {
        #[command(subcommand)]
        target: ResolveTarget,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: CheckAction,
    },

    /// Cache operations
    Cache {
        #[command(subcommand)]
        action: CheckAction,
    },
}

#[derive(Subcommand)]
enum ResolveTarget {
    /// Resolve a short key
    Key { key: String },

    /// Find the mapping for a destination URL
    Url { url: String },
}

#[derive(Subcommand)]
enum CheckAction {
    /// Check connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Resolve { target } => handle_resolve(target, &config).await?,
        Commands::Db {
            action: CheckAction::Check,
        } => check_database(&config).await?,
        Commands::Cache {
            action: CheckAction::Check,
        } => check_cache(&config).await,
    }

    Ok(())
}

/// Resolves through the full cache-aside path and prints the outcome.
async fn handle_resolve(target: ResolveTarget, config: &Config) -> Result<()> {
    let pool = connect_database(config).await?;
    let cache = build_cache(config).await;
    let resolver = build_resolver(pool, cache, config);

    let (label, resolution) = match &target {
        ResolveTarget::Key { key } => (key.as_str(), resolver.resolve_by_key(key).await),
        ResolveTarget::Url { url } => (
            url.as_str(),
            resolver.resolve_by_destination_url(url).await,
        ),
    };

    println!("{}", "🔎 Resolve".bright_blue().bold());
    println!();

    match resolution {
        Resolution::Found(mapping) => {
            println!("  Key:         {}", mapping.key.cyan());
            println!("  Destination: {}", mapping.destination_url.bright_white());
            println!(
                "  Short URL:   {}/{}",
                config.base_url.trim_end_matches('/'),
                mapping.key
            );
        }
        Resolution::Absent | Resolution::NotAttempted => {
            println!("  {} {}", "No mapping for".yellow(), label.cyan());
            println!(
                "  {}",
                "(storage errors also show up as absent; check the logs)".bright_black()
            );
        }
    }
    println!();

    Ok(())
}

/// Checks database connectivity and prints the mapping count.
async fn check_database(config: &Config) -> Result<()> {
    println!("{}", "🔌 Checking database connection...".bright_blue());
    println!("  {}", mask_connection_string(&config.database_url).bright_black());

    let pool = connect_database(config).await?;
    let repository = PgMappingRepository::new(Arc::new(pool));
    let count = repository
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  Mappings: {}", count.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Checks cache connectivity.
async fn check_cache(config: &Config) {
    println!("{}", "🔌 Checking cache connection...".bright_blue());

    let Some(redis_url) = &config.redis_url else {
        println!("{}", "⚠️  Redis is not configured; caching is disabled".yellow());
        return;
    };
    println!("  {}", mask_connection_string(redis_url).bright_black());

    let cache = build_cache(config).await;
    if cache.backend_name() == "redis" && cache.health_check().await {
        println!("{}", "✅ Redis connection OK".green().bold());
    } else {
        println!("{}", "❌ Redis unreachable".red().bold());
    }
    println!();
}
