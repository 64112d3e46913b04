use error_stack::Report;

use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{BookDraft, BookId, Rating, Status};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetBookDto, UpdateRatingDto, UpdateStatusDto,
};

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = BookDraft {
            title: dto.title,
            author: dto.author,
            pub_date: dto.pub_date,
            rating: dto.rating,
            status: dto.status,
        }
        .validate()
        .map_err(|error| Report::new(KernelError::Validation(error)))?;

        self.book_modifier().create(&book).await?;

        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        Ok(BookDto::from(book))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all().await?;
        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id);
        self.book_modifier().delete(&id).await
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier
{
    async fn update_status(&self, dto: UpdateStatusDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let status = dto
            .status
            .parse::<Status>()
            .map_err(|error| Report::new(KernelError::Validation(error)))?;

        let book = book.reconstruct(|b| b.status = status);
        self.book_modifier().update(&book).await?;

        Ok(BookDto::from(book))
    }

    async fn update_rating(&self, dto: UpdateRatingDto) -> error_stack::Result<BookDto, KernelError> {
        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let rating = Rating::try_from(dto.rating)
            .map_err(|error| Report::new(KernelError::Validation(error)))?;

        let book = book.reconstruct(|b| b.rating = rating);
        self.book_modifier().update(&book).await?;

        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where T: DependOnBookQuery + DependOnBookModifier {}

#[cfg(test)]
mod test {
    use time::{Date, Month};

    use driver::database::InMemoryBookRepository;
    use kernel::interface::query::DependOnBookQuery;
    use kernel::interface::update::DependOnBookModifier;
    use kernel::prelude::entity::ValidationError;
    use kernel::KernelError;

    use super::{
        CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
    };
    use crate::transfer::{
        CreateBookDto, DeleteBookDto, GetBookDto, UpdateRatingDto, UpdateStatusDto,
    };

    struct TestModule {
        repository: InMemoryBookRepository,
    }

    impl TestModule {
        fn new() -> Self {
            Self {
                repository: InMemoryBookRepository::new(),
            }
        }
    }

    impl DependOnBookQuery for TestModule {
        type BookQuery = InMemoryBookRepository;
        fn book_query(&self) -> &Self::BookQuery {
            &self.repository
        }
    }

    impl DependOnBookModifier for TestModule {
        type BookModifier = InMemoryBookRepository;
        fn book_modifier(&self) -> &Self::BookModifier {
            &self.repository
        }
    }

    fn create_dto(title: &str) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            author: "john smith".to_string(),
            pub_date: Some(Date::from_calendar_date(2019, Month::June, 4).unwrap()),
            rating: 1,
            status: "CheckedIn".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_book() {
        let module = TestModule::new();
        let created = module.create_book(create_dto("create")).await.unwrap();
        let found = module.get_book(GetBookDto { id: created.id }).await.unwrap();
        assert_eq!(created, found);
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft_without_storing() {
        let module = TestModule::new();
        let report = module
            .create_book(CreateBookDto {
                title: String::new(),
                ..create_dto("unused")
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation(ValidationError::TitleRequired)
        ));
        assert!(module.get_all_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_book_is_not_found() {
        let module = TestModule::new();
        let report = module
            .get_book(GetBookDto {
                id: uuid::Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn list_returns_every_stored_book() {
        let module = TestModule::new();
        let first = module.create_book(create_dto("a")).await.unwrap();
        let second = module.create_book(create_dto("b")).await.unwrap();

        let books = module.get_all_books().await.unwrap();
        assert_eq!(books.len(), 2);
        assert_ne!(first.id, second.id);
        assert!(books.iter().all(|b| b.id == first.id || b.id == second.id));
    }

    #[tokio::test]
    async fn delete_removes_book() {
        let module = TestModule::new();
        let created = module.create_book(create_dto("delete")).await.unwrap();

        module
            .delete_book(DeleteBookDto { id: created.id })
            .await
            .unwrap();
        assert!(module.get_all_books().await.unwrap().is_empty());

        let report = module
            .delete_book(DeleteBookDto { id: created.id })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn status_change_persists_and_keeps_rating() {
        let module = TestModule::new();
        let created = module.create_book(create_dto("status")).await.unwrap();

        let updated = module
            .update_status(UpdateStatusDto {
                id: created.id,
                status: "CheckedOut".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.status, "CheckedOut");

        let found = module.get_book(GetBookDto { id: created.id }).await.unwrap();
        assert_eq!(found.status, "CheckedOut");
        assert_eq!(found.rating, 1);
    }

    #[tokio::test]
    async fn status_change_rejects_unknown_value() {
        let module = TestModule::new();
        let created = module.create_book(create_dto("status")).await.unwrap();

        let report = module
            .update_status(UpdateStatusDto {
                id: created.id,
                status: "Lost".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation(ValidationError::StatusInvalid)
        ));
    }

    #[tokio::test]
    async fn status_change_on_unknown_book_is_not_found() {
        let module = TestModule::new();
        let report = module
            .update_status(UpdateStatusDto {
                id: uuid::Uuid::new_v4(),
                status: "CheckedOut".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn rating_out_of_range_leaves_record_unchanged() {
        let module = TestModule::new();
        let created = module.create_book(create_dto("rating")).await.unwrap();

        let report = module
            .update_rating(UpdateRatingDto {
                id: created.id,
                rating: 42,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation(ValidationError::RatingInvalid)
        ));

        let found = module.get_book(GetBookDto { id: created.id }).await.unwrap();
        assert_eq!(found.rating, 1);
    }

    #[tokio::test]
    async fn rating_change_persists() {
        let module = TestModule::new();
        let created = module.create_book(create_dto("rating")).await.unwrap();

        let updated = module
            .update_rating(UpdateRatingDto {
                id: created.id,
                rating: 3,
            })
            .await
            .unwrap();
        assert_eq!(updated.rating, 3);

        let found = module.get_book(GetBookDto { id: created.id }).await.unwrap();
        assert_eq!(found.rating, 3);
    }
}
