use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub pub_date: Date,
    pub rating: i32,
    pub status: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            pub_date,
            rating,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            pub_date: pub_date.into(),
            rating: rating.into(),
            status: status.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub pub_date: Option<Date>,
    pub rating: i32,
    pub status: String,
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: Uuid,
}

#[derive(Debug)]
pub struct DeleteBookDto {
    pub id: Uuid,
}

#[derive(Debug)]
pub struct UpdateStatusDto {
    pub id: Uuid,
    pub status: String,
}

#[derive(Debug)]
pub struct UpdateRatingDto {
    pub id: Uuid,
    pub rating: i32,
}
