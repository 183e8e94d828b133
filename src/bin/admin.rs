//! CLI administration tool for the short URL service.
//!
//! Operator utilities that run outside the request path. They share the
//! store and normalizer with the server but are never invoked by it.
//!
//! # Usage
//!
//! ```bash
//! # Print every stored url record
//! cargo run --bin admin -- urls list
//!
//! # Preview, then apply, scheme removal on stored URLs
//! cargo run --bin admin -- urls normalize --dry-run
//! cargo run --bin admin -- urls normalize --yes
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use shorturl::config::{Config, mask_connection_string};
use shorturl::domain::repositories::UrlRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::utils::url_normalizer::strip_scheme;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the short URL service.
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
    /// Inspect or clean up stored URLs
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Url collection subcommands.
#[derive(Subcommand)]
enum UrlsAction {
    /// Print every stored record
    List,

    /// Remove the leading http:// or https:// from stored original URLs
    Normalize {
        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, &repo).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches url collection commands.
async fn handle_urls_action(action: UrlsAction, repo: &PgUrlRepository) -> Result<()> {
    match action {
        UrlsAction::List => list_urls(repo).await,
        UrlsAction::Normalize { dry_run, yes } => normalize_urls(repo, dry_run, yes).await,
    }
}

/// Prints every stored record ordered by short URL.
async fn list_urls(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📋 Stored URLs".bright_blue().bold());
    println!();

    let records = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No urls found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<20} {}",
        "Short".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<8} {:<20} {}",
            record.short_url.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Rewrites stored original URLs without their scheme.
///
/// # Safety
///
/// - Uses the same prefix rule as the request-time normalizer; `www.` is kept
/// - A rewrite that would duplicate another record's URL is skipped with a
///   warning, so both uniqueness invariants hold afterwards
/// - Requires confirmation unless `--yes` is given
async fn normalize_urls(repo: &PgUrlRepository, dry_run: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Normalize stored URLs".bright_blue().bold());
    println!();

    let records = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    let candidates: Vec<(i64, &str, &str)> = records
        .iter()
        .filter_map(|r| {
            strip_scheme(&r.original_url).map(|n| (r.short_url, r.original_url.as_str(), n))
        })
        .collect();

    if candidates.is_empty() {
        println!("{}", "  Nothing to normalize".green());
        return Ok(());
    }

    for (short_url, original, normalized) in &candidates {
        println!(
            "  {:<8} {} → {}",
            short_url.to_string().bright_black(),
            original.yellow(),
            normalized.cyan()
        );
    }
    println!();

    if dry_run {
        println!(
            "  {} url(s) would be rewritten (dry run)",
            candidates.len().to_string().bright_white().bold()
        );
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Rewrite {} url(s)?", candidates.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let mut updated = 0;
    let mut skipped = 0;

    for (short_url, _, normalized) in &candidates {
        match repo.update_original_url(*short_url, normalized).await {
            Ok(true) => updated += 1,
            Ok(false) => {}
            Err(AppError::Conflict { .. }) => {
                skipped += 1;
                println!(
                    "  {} {}",
                    "⚠️  Skipping duplicate normalized URL:".yellow(),
                    normalized
                );
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to update url {}: {}", short_url, e)),
        }
    }

    println!();
    println!(
        "{} updated: {}, skipped: {}",
        "✅ Done.".green().bold(),
        updated.to_string().bright_green(),
        skipped.to_string().yellow()
    );
    println!();

    Ok(())
}

/// Displays collection statistics.
async fn handle_stats(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count urls: {}", e))?;
    let max = repo
        .find_max_short_url()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read max short url: {}", e))?;

    println!("  Urls:            {}", count.to_string().bright_green().bold());
    println!(
        "  Last short URL:  {}",
        max.map_or_else(|| "-".to_string(), |m| m.to_string())
            .bright_green()
            .bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
