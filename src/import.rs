//! Seed import of authors and books from comma separated text files.
//!
//! Authors file: `id,name`. Books file: `id,title,author_name,published_year`.
//! The leading id column is ignored; the database assigns ids. Blank lines and
//! lines starting with `#` are skipped.

use std::io::BufRead;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::Instrument;

use crate::{error::AppError, services::Services};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("author '{author}' not found for book '{title}'")]
    UnknownAuthor { author: String, title: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    App(#[from] AppError),
}

fn parse_error(line: usize, message: impl Into<String>) -> ImportError {
    ImportError::Parse {
        line,
        message: message.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author_name: String,
    /// Unix seconds of January 1st of the publication year (UTC)
    pub published_at: i64,
}

/// Counts of what an import run did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub authors_created: usize,
    pub authors_skipped: usize,
    pub books_created: usize,
    pub books_skipped: usize,
}

/// Iterate the meaningful lines of a seed file as `(line_number, columns)`
fn records<R: BufRead>(
    reader: R,
    columns: usize,
) -> impl Iterator<Item = Result<(usize, Vec<String>), ImportError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| {
            let number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(ImportError::Io(e))),
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let parts: Vec<String> = line.split(',').map(|part| part.trim().to_string()).collect();
            if parts.len() != columns {
                return Some(Err(parse_error(number, format!("invalid format: {}", line))));
            }
            Some(Ok((number, parts)))
        })
}

pub fn parse_authors<R: BufRead>(reader: R) -> Result<Vec<AuthorRecord>, ImportError> {
    records(reader, 2)
        .map(|record| {
            let (line, mut parts) = record?;
            let name = parts.swap_remove(1);
            if name.is_empty() {
                return Err(parse_error(line, "empty author name"));
            }
            Ok(AuthorRecord { name })
        })
        .collect()
}

pub fn parse_books<R: BufRead>(reader: R) -> Result<Vec<BookRecord>, ImportError> {
    records(reader, 4)
        .map(|record| {
            let (line, parts) = record?;
            let [_, title, author_name, year] = <[String; 4]>::try_from(parts)
                .map_err(|_| parse_error(line, "invalid format"))?;

            if title.is_empty() {
                return Err(parse_error(line, "empty title"));
            }
            if author_name.is_empty() {
                return Err(parse_error(line, "empty author name"));
            }
            let year: i32 = year
                .parse()
                .map_err(|_| parse_error(line, format!("invalid published year '{}'", year)))?;
            let published_at = NaiveDate::from_ymd_opt(year, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc().timestamp())
                .ok_or_else(|| parse_error(line, format!("published year {} out of range", year)))?;

            Ok(BookRecord {
                title,
                author_name,
                published_at,
            })
        })
        .collect()
}

/// Insert authors, then books, skipping records that already exist
pub async fn run_import(
    services: &Services,
    authors: &[AuthorRecord],
    books: &[BookRecord],
) -> Result<ImportSummary, ImportError> {
    let span = tracing::info_span!("library_import", authors = authors.len(), books = books.len());
    async move {
        let mut summary = ImportSummary::default();

        for record in authors {
            if let Some(existing) = services.authors.find_by_name(&record.name).await? {
                tracing::info!("Author already exists (id={}, name={}), skipping", existing.id, existing.name);
                summary.authors_skipped += 1;
                continue;
            }
            let author = services.authors.create(&record.name).await?;
            tracing::info!("Inserted author (id={}, name={})", author.id, author.name);
            summary.authors_created += 1;
        }

        for record in books {
            let author = services
                .authors
                .find_by_name(&record.author_name)
                .await?
                .ok_or_else(|| ImportError::UnknownAuthor {
                    author: record.author_name.clone(),
                    title: record.title.clone(),
                })?;

            if let Some(existing) = services
                .books
                .find_by_title_and_author(&record.title, author.id)
                .await?
            {
                tracing::info!("Book already exists (id={}, title={}), skipping", existing.id, existing.title);
                summary.books_skipped += 1;
                continue;
            }
            let book = services
                .books
                .create(&record.title, author.id, record.published_at)
                .await?;
            tracing::info!("Inserted book (id={}, title={})", book.id, book.title);
            summary.books_created += 1;
        }

        tracing::info!(?summary, "Import completed");
        Ok(summary)
    }
    .instrument(span)
    .await
}
