//! CLI administration tool for movies-api.
//!
//! Inspects the catalog and database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Catalog totals
//! cargo run --bin admin -- stats
//!
//! # Browse the listing exactly as the API pages it
//! cargo run --bin admin -- movies list --page 2
//! cargo run --bin admin -- movies list --page last
//!
//! # Show a single movie
//! cargo run --bin admin -- movies show 3d825f60-9fff-4dfe-b294-1a45fa1e115d
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`):
//!   PostgreSQL connection
//! - `LISTING_STRATEGY`, `DETAIL_DEDUPLICATE`: same meaning as for the server,
//!   so `movies list` and `movies show` print what the API would return

use movies_api::application::services::MovieService;
use movies_api::config::Config;
use movies_api::domain::entities::MovieRecord;
use movies_api::infrastructure::persistence::PgCatalogRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting the movie catalog.
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
    /// Show catalog totals
    Stats,

    /// Browse movies
    Movies {
        #[command(subcommand)]
        action: MovieAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Movie browsing subcommands.
#[derive(Subcommand)]
enum MovieAction {
    /// List one page of movies
    List {
        /// Page number or "last"
        #[arg(short, long, default_value = "1")]
        page: String,
    },

    /// Show a single movie
    Show {
        /// Movie UUID
        id: String,
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
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Movies { action } => handle_movie_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays catalog totals.
///
/// Shows movie, genre and person counts plus role-link counts per role.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Catalog".bright_blue().bold());
    println!();

    let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM film_work")
        .fetch_one(pool)
        .await?;

    let genres: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genre")
        .fetch_one(pool)
        .await?;

    let persons: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM person")
        .fetch_one(pool)
        .await?;

    let roles: Vec<(String, i64)> = sqlx::query_as(
        "SELECT role, COUNT(*) FROM person_film_work GROUP BY role ORDER BY role",
    )
    .fetch_all(pool)
    .await?;

    println!("  Movies:  {}", movies.to_string().bright_green().bold());
    println!("  Genres:  {}", genres.to_string().bright_green().bold());
    println!("  Persons: {}", persons.to_string().bright_green().bold());
    println!();

    if !roles.is_empty() {
        println!("{}", "  Role links".bright_white().bold());
        for (role, count) in roles {
            println!("    {:<10} {}", role.cyan(), count.to_string().bright_green());
        }
        println!();
    }

    Ok(())
}

/// Builds the service the API would use for this configuration.
fn movie_service(pool: &PgPool, config: &Config) -> MovieService<PgCatalogRepository> {
    let repo = Arc::new(PgCatalogRepository::new(Arc::new(pool.clone())));
    MovieService::with_options(repo, config.service_options())
}

/// Dispatches movie browsing commands through [`MovieService`].
async fn handle_movie_action(action: MovieAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = movie_service(pool, config);

    match action {
        MovieAction::List { page } => {
            let page = service
                .list_movies(Some(&page))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list movies: {}", e))?;

            println!(
                "{} {} / {}  ({} movies)",
                "🎬 Page".bright_blue().bold(),
                page.window.number.to_string().bright_white().bold(),
                page.window.total_pages,
                page.count
            );
            println!();

            if page.results.is_empty() {
                println!("{}", "  No movies found".yellow());
                return Ok(());
            }

            for record in &page.results {
                println!(
                    "  {}  {:<50} {}",
                    record.movie.id.to_string().bright_black(),
                    record.movie.title.cyan(),
                    record
                        .movie
                        .rating
                        .map(|r| format!("{:.1}", r))
                        .unwrap_or_else(|| "-".to_string())
                        .bright_yellow()
                );
            }
            println!();
        }
        MovieAction::Show { id } => {
            let record = service
                .get_movie(&id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            print_movie(&record);
        }
    }

    Ok(())
}

fn print_movie(record: &MovieRecord) {
    let movie = &record.movie;
    let credits = &record.credits;

    println!("{}", movie.title.bright_blue().bold());
    println!("  ID:      {}", movie.id.to_string().bright_black());
    println!("  Type:    {}", movie.kind);
    if let Some(date) = movie.creation_date {
        println!("  Created: {}", date);
    }
    if let Some(rating) = movie.rating {
        println!("  Rating:  {}", format!("{:.1}", rating).bright_yellow());
    }
    if let Some(description) = &movie.description {
        println!();
        println!("  {}", description);
    }
    println!();

    for (label, names) in [
        ("Genres", &credits.genres),
        ("Actors", &credits.actors),
        ("Directors", &credits.directors),
        ("Writers", &credits.writers),
    ] {
        let joined = if names.is_empty() {
            "-".bright_black().to_string()
        } else {
            names.join(", ").cyan().to_string()
        };
        println!("  {:<10} {}", label.bright_white().bold(), joined);
    }
    println!();
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
