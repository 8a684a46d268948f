//! Author management service

use std::sync::Arc;

use super::ListQuery;
use crate::{
    error::{AppError, AppResult},
    models::Author,
    repository::AuthorRepository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorsService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// List authors with filters, sorts and field selection
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Author>> {
        let opts = query.to_options(&Author::SCHEMA)?;
        self.repository.list(&opts).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Author> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        self.repository.find_by_name(name).await
    }

    pub async fn create(&self, name: &str) -> AppResult<Author> {
        let mut author = Author {
            id: 0,
            name: name.to_string(),
        };
        author.id = self.repository.create(&author).await?;
        tracing::info!("Created author id={}", author.id);
        Ok(author)
    }

    pub async fn update(&self, id: i32, name: &str) -> AppResult<Author> {
        let mut author = self.get(id).await?;
        author.name = name.to_string();
        self.repository.update(&author).await?;
        Ok(author)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::authors::MockAuthorRepository;
    use tokio_test::{assert_err, assert_ok};

    fn service(mock: MockAuthorRepository) -> AuthorsService {
        AuthorsService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_list_passes_parsed_options() {
        let mut mock = MockAuthorRepository::new();
        mock.expect_list()
            .withf(|opts| {
                opts.filters.len() == 1
                    && opts.filters[0].field == "name"
                    && opts.filters[0].value == "%tol%"
                    && opts.fields == vec!["id", "name"]
            })
            .times(1)
            .returning(|_| {
                Ok(vec![Author {
                    id: 1,
                    name: "J.R.R. Tolkien".into(),
                }])
            });

        let query = ListQuery {
            filters: vec!["name__ilike__%tol%".into()],
            sorts: vec![],
            fields: "id, name".into(),
        };
        let authors = assert_ok!(service(mock).list(&query).await);
        assert_eq!(authors.len(), 1);
    }

    #[tokio::test]
    async fn test_list_rejects_bad_sort_without_touching_storage() {
        let mut mock = MockAuthorRepository::new();
        mock.expect_list().never();

        let query = ListQuery {
            sorts: vec!["name__sideways".into()],
            ..Default::default()
        };
        assert!(matches!(service(mock).list(&query).await, Err(AppError::Query(_))));
    }

    #[tokio::test]
    async fn test_get_missing_author() {
        let mut mock = MockAuthorRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let err = assert_err!(service(mock).get(9).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_returns_new_id() {
        let mut mock = MockAuthorRepository::new();
        mock.expect_create()
            .withf(|author| author.name == "Ursula K. Le Guin")
            .returning(|_| Ok(12));

        let author = assert_ok!(service(mock).create("Ursula K. Le Guin").await);
        assert_eq!(author.id, 12);
    }

    #[tokio::test]
    async fn test_update_missing_author_skips_write() {
        let mut mock = MockAuthorRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));
        mock.expect_update().never();

        let err = assert_err!(service(mock).update(3, "New").await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_existing_author() {
        let mut mock = MockAuthorRepository::new();
        mock.expect_get_by_id().returning(|id| {
            Ok(Some(Author {
                id,
                name: "Old".into(),
            }))
        });
        mock.expect_update()
            .withf(|author| author.id == 3 && author.name == "New")
            .returning(|_| Ok(()));

        let author = assert_ok!(service(mock).update(3, "New").await);
        assert_eq!(author.name, "New");
    }
}
