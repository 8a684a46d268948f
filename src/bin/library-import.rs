//! Seed the library database from authors and books text files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use borrow_book_server::{
    config::AppConfig,
    db,
    import::{self, ImportError},
    logging,
    repository::Repository,
    services::Services,
};

/// Import authors and books, skipping records that already exist
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Authors file, one `id,name` per line
    #[arg(long)]
    authors: PathBuf,

    /// Books file, one `id,title,author_name,published_year` per line
    #[arg(long)]
    books: PathBuf,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn with_path<T>(result: Result<T, ImportError>, path: &Path) -> Result<T> {
    result.with_context(|| format!("reading {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    let config = AppConfig::load().context("Failed to load configuration")?;
    let _log_guard = logging::init(&config.logging);

    let authors = with_path(import::parse_authors(open(&args.authors)?), &args.authors)?;
    let books = with_path(import::parse_books(open(&args.books)?), &args.books)?;

    let pool = db::connect_with_retry(&config.database)
        .await
        .context("Failed to connect to database")?;
    db::migrate(&pool)
        .await
        .context("Failed to run database migrations")?;

    let services = Services::new(Repository::new(pool));
    let summary = import::run_import(&services, &authors, &books).await?;

    println!(
        "authors: {} created, {} skipped; books: {} created, {} skipped",
        summary.authors_created, summary.authors_skipped, summary.books_created, summary.books_skipped
    );
    Ok(())
}
