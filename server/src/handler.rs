use std::sync::Arc;

use driver::database::{PostgresBookRepository, PostgresDatabase};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::KernelError;

/// Repository chosen at composition time; routes stay generic over it.
pub struct AppModule<R>(Arc<R>);

impl<R> Clone for AppModule<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl AppModule<PostgresBookRepository> {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let db = PostgresDatabase::new().await?;
        Ok(Self::with_repository(PostgresBookRepository::new(db)))
    }
}

impl<R> AppModule<R> {
    pub fn with_repository(repository: R) -> Self {
        Self(Arc::new(repository))
    }
}

impl<R> DependOnBookQuery for AppModule<R>
where
    R: BookQuery,
{
    type BookQuery = R;
    fn book_query(&self) -> &Self::BookQuery {
        &self.0
    }
}

impl<R> DependOnBookModifier for AppModule<R>
where
    R: BookModifier,
{
    type BookModifier = R;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.0
    }
}
