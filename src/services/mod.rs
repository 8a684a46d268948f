//! Business logic services

pub mod authors;
pub mod books;
pub mod borrows;
pub mod system;

use crate::{
    error::AppResult,
    query::{QueryOptions, TableSchema},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub borrows: borrows::BorrowsService,
    pub system: system::SystemService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.authors),
            books: books::BooksService::new(repository.books),
            borrows: borrows::BorrowsService::new(repository.borrows),
            system: system::SystemService::new(repository.system),
        }
    }
}

/// Raw `filter`, `sort` and `fields` query parameters of a list request
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filters: Vec<String>,
    pub sorts: Vec<String>,
    pub fields: String,
}

impl ListQuery {
    /// Parse into [`QueryOptions`] and check them against `schema`.
    ///
    /// Unknown operators still run as `=`; they are logged since a typo such as
    /// `qe` silently changes the meaning of the filter.
    pub fn to_options(&self, schema: &TableSchema) -> AppResult<QueryOptions> {
        let opts = QueryOptions::from_raw(&self.filters, &self.sorts, &self.fields)?;
        schema.validate(&opts)?;
        for filter in opts.unknown_operators() {
            tracing::warn!(
                "Unknown filter operator '{}' on {}.{}, using '='",
                filter.operator,
                schema.name,
                filter.field
            );
        }
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::Author, query::QueryError};

    #[test]
    fn test_list_query_to_options() {
        let query = ListQuery {
            filters: vec!["name__neq__x".into()],
            sorts: vec!["id__desc".into()],
            fields: "id,name".into(),
        };
        let opts = query.to_options(&Author::SCHEMA).unwrap();
        assert_eq!(opts.filters[0].operator, "neq");
        assert!(opts.sorts[0].descending);
        assert_eq!(opts.fields, vec!["id", "name"]);
    }

    #[test]
    fn test_list_query_invalid_filter() {
        let query = ListQuery {
            filters: vec!["name".into()],
            ..Default::default()
        };
        assert!(matches!(
            query.to_options(&Author::SCHEMA),
            Err(AppError::Query(QueryError::InvalidFilterFormat(_)))
        ));
    }

    #[test]
    fn test_list_query_checks_columns() {
        let query = ListQuery {
            filters: vec!["id__ilike__4%".into()],
            ..Default::default()
        };
        assert!(matches!(
            query.to_options(&Author::SCHEMA),
            Err(AppError::Query(QueryError::UnsupportedOperator { .. }))
        ));

        let query = ListQuery {
            fields: "id,email".into(),
            ..Default::default()
        };
        assert!(matches!(
            query.to_options(&Author::SCHEMA),
            Err(AppError::Query(QueryError::UnknownColumn { .. }))
        ));
    }
}
