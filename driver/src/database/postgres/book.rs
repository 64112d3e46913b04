use error_stack::Report;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookPubDate, BookTitle, Rating, Status};
use kernel::KernelError;

use crate::database::postgres::{with_timeout, PostgresDatabase};

pub struct PostgresBookRepository {
    db: PostgresDatabase,
}

impl PostgresBookRepository {
    pub fn new(db: PostgresDatabase) -> Self {
        Self { db }
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    pubdate: Date,
    rating: i32,
    status: String,
}

impl TryFrom<BookRow> for Book {
    type Error = Report<KernelError>;

    fn try_from(value: BookRow) -> Result<Self, Self::Error> {
        // a stored value outside the enum ranges means the table was written
        // past the application boundary
        let rating = Rating::try_from(value.rating)
            .map_err(|error| Report::new(KernelError::Internal).attach_printable(error))?;
        let status = value
            .status
            .parse::<Status>()
            .map_err(|error| Report::new(KernelError::Internal).attach_printable(error))?;
        Ok(Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            BookPubDate::new(value.pubdate),
            rating,
            status,
        ))
    }
}

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    async fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        let row = with_timeout(
            sqlx::query_as::<_, BookRow>(
                // language=postgresql
                r#"
                SELECT id, title, author, pubdate, rating, status
                FROM books
                WHERE id = $1
                "#,
            )
            .bind(id.as_ref())
            .fetch_optional(self.db.pool()),
        )
        .await?;
        row.map(Book::try_from).transpose()
    }

    async fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = with_timeout(
            sqlx::query_as::<_, BookRow>(
                // language=postgresql
                r#"
                SELECT id, title, author, pubdate, rating, status
                FROM books
                "#,
            )
            .fetch_all(self.db.pool()),
        )
        .await?;
        rows.into_iter().map(Book::try_from).collect()
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    async fn create(&self, book: &Book) -> error_stack::Result<(), KernelError> {
        // existence probe and insert are two round trips, a concurrent create
        // with the same id can still land on the primary key constraint
        if self.find_by_id(book.id()).await?.is_some() {
            return Err(Report::new(KernelError::NotUnique)
                .attach_printable("book id is already stored"));
        }

        let now = OffsetDateTime::now_utc();
        with_timeout(
            sqlx::query(
                // language=postgresql
                r#"
                INSERT INTO books (id, title, author, pubdate, rating, status, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(book.id().as_ref())
            .bind(book.title().as_ref())
            .bind(book.author().as_ref())
            .bind(book.pub_date().as_ref())
            .bind(i32::from(*book.rating()))
            .bind(book.status().to_string())
            .bind(now)
            .bind(now)
            .execute(self.db.pool()),
        )
        .await?;
        Ok(())
    }

    async fn update(&self, book: &Book) -> error_stack::Result<(), KernelError> {
        let result = with_timeout(
            sqlx::query(
                // language=postgresql
                r#"
                UPDATE books
                SET rating = $2, status = $3, updated_at = $4
                WHERE id = $1
                "#,
            )
            .bind(book.id().as_ref())
            .bind(i32::from(*book.rating()))
            .bind(book.status().to_string())
            .bind(OffsetDateTime::now_utc())
            .execute(self.db.pool()),
        )
        .await?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound));
        }
        Ok(())
    }

    async fn delete(&self, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        let result = with_timeout(
            sqlx::query(
                // language=postgresql
                r#"
                DELETE FROM books
                WHERE id = $1
                "#,
            )
            .bind(book_id.as_ref())
            .execute(self.db.pool()),
        )
        .await?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::{Date, Month};

    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{BookDraft, Status};
    use kernel::KernelError;

    use crate::database::postgres::{PostgresBookRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let repo = PostgresBookRepository::new(db);

        let book = BookDraft {
            title: "test".to_string(),
            author: "tester".to_string(),
            pub_date: Some(Date::from_calendar_date(2019, Month::June, 4).unwrap()),
            rating: 1,
            status: "CheckedIn".to_string(),
        }
        .validate()
        .expect("draft is valid");

        repo.create(&book).await?;

        let found = repo.find_by_id(book.id()).await?;
        assert_eq!(found, Some(book.clone()));

        let duplicate = repo.create(&book).await;
        assert!(duplicate.is_err());

        let book = book.reconstruct(|b| b.status = Status::CheckedOut);
        repo.update(&book).await?;

        let found = repo.find_by_id(book.id()).await?;
        assert_eq!(found, Some(book.clone()));

        repo.delete(book.id()).await?;
        let found = repo.find_by_id(book.id()).await?;
        assert!(found.is_none());

        Ok(())
    }
}
