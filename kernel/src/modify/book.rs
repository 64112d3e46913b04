use crate::entity::{Book, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    async fn create(&self, book: &Book) -> error_stack::Result<(), KernelError>;
    async fn update(&self, book: &Book) -> error_stack::Result<(), KernelError>;
    async fn delete(&self, book_id: &BookId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&self) -> &Self::BookModifier;
}
