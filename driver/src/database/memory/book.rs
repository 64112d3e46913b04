use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

/// Map-backed store with no persistence. Unlike the relational store it does
/// not enforce id uniqueness on create.
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<BookId, Book>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    async fn find_by_id(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        Ok(books.get(id).cloned())
    }

    async fn find_all(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        Ok(books.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    async fn create(&self, book: &Book) -> error_stack::Result<(), KernelError> {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        books.insert(book.id().clone(), book.clone());
        Ok(())
    }

    async fn update(&self, book: &Book) -> error_stack::Result<(), KernelError> {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        if !books.contains_key(book.id()) {
            return Err(Report::new(KernelError::NotFound));
        }
        books.insert(book.id().clone(), book.clone());
        Ok(())
    }

    async fn delete(&self, book_id: &BookId) -> error_stack::Result<(), KernelError> {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        match books.remove(book_id) {
            Some(_) => Ok(()),
            None => Err(Report::new(KernelError::NotFound)),
        }
    }
}

#[cfg(test)]
mod test {
    use time::{Date, Month};

    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{Book, BookDraft, Rating, Status};
    use kernel::KernelError;

    use crate::database::memory::InMemoryBookRepository;

    fn book(title: &str) -> Book {
        BookDraft {
            title: title.to_string(),
            author: "tester".to_string(),
            pub_date: Some(Date::from_calendar_date(2019, Month::June, 4).unwrap()),
            rating: 1,
            status: "CheckedIn".to_string(),
        }
        .validate()
        .expect("draft is valid")
    }

    #[tokio::test]
    async fn stores_and_finds_books() {
        let repo = InMemoryBookRepository::new();
        let book = book("stored");

        repo.create(&book).await.unwrap();
        let found = repo.find_by_id(book.id()).await.unwrap();
        assert_eq!(found, Some(book.clone()));

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![book]);
    }

    #[tokio::test]
    async fn create_does_not_enforce_uniqueness() {
        let repo = InMemoryBookRepository::new();
        let book = book("twice");

        repo.create(&book).await.unwrap();
        repo.create(&book).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_overwrites_existing_entry() {
        let repo = InMemoryBookRepository::new();
        let book = book("update");
        repo.create(&book).await.unwrap();

        let book = book.reconstruct(|b| {
            b.status = Status::CheckedOut;
            b.rating = Rating::Three;
        });
        repo.update(&book).await.unwrap();

        let found = repo.find_by_id(book.id()).await.unwrap();
        assert_eq!(found, Some(book));
    }

    #[tokio::test]
    async fn update_unknown_book_is_not_found() {
        let repo = InMemoryBookRepository::new();
        let report = repo.update(&book("missing")).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_entry_once() {
        let repo = InMemoryBookRepository::new();
        let book = book("delete");
        repo.create(&book).await.unwrap();

        repo.delete(book.id()).await.unwrap();
        assert!(repo.find_by_id(book.id()).await.unwrap().is_none());

        let report = repo.delete(book.id()).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }
}
